use std::fs::OpenOptions;
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Sink for the single line written per gesture update.
pub trait LineWriter {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

// sysfs node writer, never creates the node
#[derive(Debug, Clone)]
pub struct SysfsNode {
    path: PathBuf,
}

impl SysfsNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineWriter for SysfsNode {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| Error::Open { path: self.path.clone(), source })?;

        let bytes = format!("{}\n", line).into_bytes();
        // one write(2) per line, sysfs store() sees the whole value
        let result = unsafe { libc::write(file.as_raw_fd(), bytes.as_ptr() as *const _, bytes.len()) };
        if result < 0 {
            return Err(Error::Write { path: self.path.clone(), source: io::Error::last_os_error() });
        }
        if result as usize != bytes.len() {
            return Err(Error::Write {
                path: self.path.clone(),
                source: io::Error::new(io::ErrorKind::WriteZero, "short write"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_whole_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gesture_mode");
        std::fs::write(&path, "1111111\nstale\n").unwrap();

        let mut node = SysfsNode::new(&path);
        node.write_line("0100100").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0100100\n");
    }

    #[test]
    fn missing_node_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let mut node = SysfsNode::new(&path);

        match node.write_line("0000000") {
            Err(Error::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!path.exists());
    }
}
