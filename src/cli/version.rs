//! Version command for the imagemap CLI.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("imagemap {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_is_semver() {
        let version = version_line();
        let number = version.strip_prefix("imagemap ").unwrap();
        assert_eq!(number, VERSION);
        assert!(number.split('.').count() >= 2, "major.minor at least: {}", number);
    }
}
