use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SpeakError};

/// Reads a whole text file into memory.
///
/// A path that does not resolve to a readable file is reported as
/// `SpeakError::FileNotFound` so callers can ask for another one.
/// Other failures (invalid UTF-8, ...) are surfaced as `SpeakError::Io`.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	if !path.is_file() {
		return Err(SpeakError::FileNotFound(path.to_path_buf()));
	}

	match fs::read_to_string(path) {
		Ok(text) => Ok(text),
		Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
			Err(SpeakError::FileNotFound(path.to_path_buf()))
		}
		Err(e) => Err(e.into()),
	}
}

/// Returns `true` if `path` points to an existing regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
	path.as_ref().is_file()
}
