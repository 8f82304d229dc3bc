//! Plain file I/O for the settings document
//!
//! Writes go straight to the target file. There is no temp-file-then-rename
//! step, so an interrupted write can leave a truncated settings file.

use std::fs::{self, OpenOptions};
use std::io::Write;

use crate::{Error, NormalizedPath, Result};

/// Permission bits used for the settings file: owner read/write, others read.
pub const CONFIG_FILE_MODE: u32 = 0o644;

/// Write `content` to `path`, replacing anything already there.
///
/// Missing parent directories are created. On unix the file mode is set
/// to `mode` after the write, including when the file already existed.
pub fn write_file(path: &NormalizedPath, content: &[u8], mode: u32) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options
        .open(&native_path)
        .map_err(|e| Error::io(&native_path, e))?;
    file.write_all(content)
        .map_err(|e| Error::io(&native_path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&native_path, fs::Permissions::from_mode(mode))
            .map_err(|e| Error::io(&native_path, e))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}
