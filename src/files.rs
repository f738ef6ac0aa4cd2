use std::{ffi::OsString, fs::read_to_string, path::Path};

use log::warn;

use crate::errors::{Result, TextGridError};

/// Returns `true` if `path` has specified extension.
/// Case-insensitive.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().map(|s| s.to_ascii_lowercase()) == Some(OsString::from(&ext.to_lowercase()))
}

/// Reads the file at `path` into lines, with line endings removed.
/// All other whitespace is kept.
///
/// If `max_bytes` is set, the file size is checked before anything is read.
pub fn read_lines(path: &Path, max_bytes: Option<u64>) -> Result<Vec<String>> {
    if !has_extension(path, "textgrid") {
        warn!("'{}' does not have a TextGrid extension", path.display());
    }

    if let Some(limit) = max_bytes {
        let size = path.metadata()
            .map_err(|source| TextGridError::Io { path: path.to_owned(), source })?
            .len();
        if size > limit {
            return Err(TextGridError::FileTooLarge { path: path.to_owned(), size, limit })
        }
    }

    // file handle is closed before returning
    let content = read_to_string(path)
        .map_err(|source| TextGridError::Io { path: path.to_owned(), source })?;

    Ok(content.lines().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn extension_ignores_case() {
        assert!(has_extension(Path::new("a/b/speaker.TextGrid"), "textgrid"));
        assert!(has_extension(Path::new("speaker.textgrid"), "TextGrid"));
        assert!(!has_extension(Path::new("speaker.eaf"), "textgrid"));
        assert!(!has_extension(Path::new("speaker"), "textgrid"));
    }

    #[test]
    fn lines_are_stripped_of_line_endings_only() {
        let mut file = tempfile::Builder::new().suffix(".TextGrid").tempfile().unwrap();
        write!(file, "first\r\n    second  \nthird").unwrap();

        let lines = read_lines(file.path(), None).unwrap();
        assert_eq!(lines, vec!["first", "    second  ", "third"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.TextGrid");
        match read_lines(&path, None) {
            Err(TextGridError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn size_limit_is_enforced() {
        let mut file = tempfile::Builder::new().suffix(".TextGrid").tempfile().unwrap();
        write!(file, "0123456789").unwrap();
        file.flush().unwrap();

        match read_lines(file.path(), Some(4)) {
            Err(TextGridError::FileTooLarge { size, limit, .. }) => {
                assert_eq!(size, 10);
                assert_eq!(limit, 4);
            },
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
        assert_eq!(read_lines(file.path(), Some(10)).unwrap().len(), 1);
    }
}
