use std::process::Command;

use log::debug;

use crate::constants::{DOZE_DEFAULT, HAPTIC_DEFAULT};
use crate::error::{Error, Result};
use crate::paths::{doze_enabled_setting, haptic_feedback_setting};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Secure,
    System,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Secure => "secure",
            Namespace::System => "system",
        }
    }
}

/// Host settings provider (secure/system tables).
pub trait SettingsProvider {
    fn get_int(&self, ns: Namespace, key: &str) -> Result<Option<i32>>;
    fn put_int(&mut self, ns: Namespace, key: &str, value: i32) -> Result<()>;
}

// backed by the `settings` shell command
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsCommand;

impl SettingsCommand {
    fn run(action: &'static str, args: &[&str]) -> Result<String> {
        let out = Command::new("settings").arg(action).args(args).output()?;
        if out.status.success() {
            Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
        } else {
            Err(Error::Settings {
                action,
                key: args.join(" "),
                reason: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            })
        }
    }
}

impl SettingsProvider for SettingsCommand {
    fn get_int(&self, ns: Namespace, key: &str) -> Result<Option<i32>> {
        let result = Self::run("get", &[ns.as_str(), key])?;
        debug!("[Settings] {} {} result: '{}'", ns.as_str(), key, result);
        Ok(parse_setting(&result))
    }

    fn put_int(&mut self, ns: Namespace, key: &str, value: i32) -> Result<()> {
        Self::run("put", &[ns.as_str(), key, &value.to_string()]).map(|_| ())
    }
}

// "null" is how the command prints an unset key
pub(crate) fn parse_setting(raw: &str) -> Option<i32> {
    match raw.trim() {
        "" | "null" => None,
        v => v.parse::<i32>().ok(),
    }
}

fn get_flag(settings: &dyn SettingsProvider, ns: Namespace, key: &str, default: i32) -> Result<bool> {
    Ok(settings.get_int(ns, key)?.unwrap_or(default) != 0)
}

// doze & haptic helpers
pub fn is_doze_enabled(settings: &dyn SettingsProvider) -> Result<bool> {
    get_flag(settings, Namespace::Secure, doze_enabled_setting(), DOZE_DEFAULT)
}
pub fn enable_doze(settings: &mut dyn SettingsProvider, enable: bool) -> Result<()> {
    settings.put_int(Namespace::Secure, doze_enabled_setting(), enable as i32)
}
pub fn haptic_feedback_enabled(settings: &dyn SettingsProvider) -> Result<bool> {
    get_flag(settings, Namespace::System, haptic_feedback_setting(), HAPTIC_DEFAULT)
}
pub fn set_haptic_feedback(settings: &mut dyn SettingsProvider, enable: bool) -> Result<()> {
    settings.put_int(Namespace::System, haptic_feedback_setting(), enable as i32)
}
