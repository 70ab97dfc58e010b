use chrono::Local;
use std::path::Path;

#[inline]
pub fn timestamp_for_dir() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// File name without extension, falling back to the whole path.
pub fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("images/cat.photo.png"), "cat.photo");
        assert_eq!(file_stem("dog"), "dog");
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp_for_dir();
        assert_eq!(ts.len(), "2024-01-01_00-00-00".len());
        assert!(!ts.contains(' '));
    }
}
