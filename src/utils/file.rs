//! File reading utilities

use crate::error::{EgInfoError, Result};
use std::path::Path;

/// Read the first line of a file, trimmed.
/// Optimized for single-line pseudo-files like /proc/sys/kernel/hostname,
/// which is why this reads through a single open/read/close syscall trio
/// instead of a buffered reader.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| EgInfoError::Parse("invalid path".to_string()))?;

    unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            return Err(EgInfoError::from(std::io::Error::last_os_error()));
        }

        let mut buffer = [0u8; 256];
        let bytes_read = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);

        if bytes_read < 0 {
            return Err(EgInfoError::from(std::io::Error::last_os_error()));
        }

        if bytes_read == 0 {
            return Ok(String::new());
        }

        let content = std::str::from_utf8(&buffer[..bytes_read as usize])
            .map_err(|_| EgInfoError::Parse("invalid UTF-8".to_string()))?;
        Ok(content.lines().next().unwrap_or("").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_first_line_takes_only_the_first_line() {
        let path = std::env::temp_dir().join("eginfo-read-first-line-test");
        std::fs::write(&path, "first\nsecond\n").unwrap();
        assert_eq!(read_first_line(&path).unwrap(), "first");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_first_line_missing_file_is_an_error() {
        assert!(read_first_line("/eginfo/does/not/exist").is_err());
    }
}
