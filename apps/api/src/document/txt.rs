use std::path::Path;

use super::ExtractionError;

/// Reads a .txt/.md file as UTF-8, silently dropping invalid byte sequences.
pub fn extract_txt(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    Ok(decode_ignoring_errors(&bytes))
}

fn decode_ignoring_errors(bytes: &[u8]) -> String {
    match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(_) => String::from_utf8_lossy(bytes).replace('\u{FFFD}', ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        assert_eq!(decode_ignoring_errors("Zoë, Düsseldorf".as_bytes()), "Zoë, Düsseldorf");
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let bytes = b"Jane\xff\xfe Doe";
        assert_eq!(decode_ignoring_errors(bytes), "Jane Doe");
    }

    #[test]
    fn test_extract_txt_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "Led a team of 4").unwrap();
        assert_eq!(extract_txt(&path).unwrap(), "Led a team of 4");
    }

    #[test]
    fn test_extract_txt_missing_file_is_io_error() {
        let result = extract_txt(Path::new("/nonexistent/notes.txt"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }
}
