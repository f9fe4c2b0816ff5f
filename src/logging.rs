use std::ffi::CString;
use std::os::raw::c_int;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::constants::{LOG_DEBUG, LOG_ERROR, LOG_INFO, LOG_WARN};
use crate::ffi::__android_log_print;
use crate::paths::log_tag;

// logcat backend for the log facade
struct LogcatLogger;

static LOGGER: LogcatLogger = LogcatLogger;

impl Log for LogcatLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let prio = match record.level() {
            Level::Error => LOG_ERROR,
            Level::Warn => LOG_WARN,
            Level::Info => LOG_INFO,
            Level::Debug | Level::Trace => LOG_DEBUG,
        };
        log_write(prio, &record.args().to_string());
    }

    fn flush(&self) {}
}

pub(crate) fn log_write(level: c_int, msg: &str) {
    // interior nul would truncate, drop the line instead
    let (Ok(tag), Ok(fmt), Ok(c_msg)) = (CString::new(log_tag()), CString::new("%s"), CString::new(msg)) else {
        return;
    };
    unsafe { __android_log_print(level, tag.as_ptr(), fmt.as_ptr(), c_msg.as_ptr()) };
}

pub(crate) fn level_for(debug: bool) -> LevelFilter {
    if debug { LevelFilter::Debug } else { LevelFilter::Info }
}

/// Installs the logcat logger. Calling it again only adjusts the level.
pub fn init(debug: bool) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_for(debug));
}
