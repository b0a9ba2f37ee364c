//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← start
/// /home/user/site/taxon.toml      ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("content/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("taxon.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("taxon.toml"));
        assert_eq!(found, Some(dir.path().join("taxon.toml")));
    }

    #[test]
    fn test_nearest_wins() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("taxon.toml"), "").unwrap();
        fs::write(nested.join("taxon.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("taxon.toml"));
        assert_eq!(found, Some(nested.join("taxon.toml")));
    }

    #[test]
    fn test_directory_with_config_name_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("taxon.toml")).unwrap();

        let found = find_config_file(dir.path(), Path::new("taxon.toml"));
        assert_ne!(found, Some(dir.path().join("taxon.toml")));
    }

    #[test]
    fn test_absolute_path() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.toml");
        assert_eq!(find_config_file(Path::new("/"), &config), None);

        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &config), Some(config));
    }
}
