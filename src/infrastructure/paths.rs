//! Filesystem locations for plugin output.
//!
//! Zellij mounts the user's home directory at `/host` inside the plugin
//! sandbox, so `/host/.local/share/...` lands in `~/.local/share/...`.

use std::path::PathBuf;

const TRACE_FILE_NAME: &str = "aecintel-otlp.json";

/// Directory for files the plugin writes.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("aecintel")
}

/// Live trace file; rotated backups sit next to it with `.1`, `.2`, ...
#[must_use]
pub fn trace_file() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(
            trace_file(),
            PathBuf::from("/host/.local/share/zellij/aecintel/aecintel-otlp.json")
        );
        assert!(trace_file().starts_with(data_dir()));
    }
}
