use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::StandchartConfig;
use super::validation::validate_config_result;
use crate::core::{Error, Result, ResultExt};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".standchart.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<StandchartConfig> {
    let config = toml::from_str::<StandchartConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse config: {}", e)))?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Make a relative `catalog_path` relative to the directory holding the config file.
fn resolve_catalog_path(mut config: StandchartConfig, config_path: &Path) -> StandchartConfig {
    if let (Some(catalog), Some(base)) = (&config.catalog_path, config_path.parent()) {
        if catalog.is_relative() {
            config.catalog_path = Some(base.join(catalog));
        }
    }
    config
}

/// Load a config file that the user named explicitly. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<StandchartConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents).context(path.display().to_string())?;
    debug!(path = %path.display(), "Loaded explicit config");
    Ok(resolve_catalog_path(config, path))
}

/// Try loading config from a specific path, warning on anything but a missing file
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<StandchartConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!(path = %config_path.display(), "Loaded config");
            Some(resolve_catalog_path(config, config_path))
        }
        Err(e) => {
            warn!(path = %config_path.display(), "{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<user config dir>/standchart/config.toml`, if the platform has one
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("standchart").join("config.toml"))
}

/// Search `start` and its ancestors, then `user_config`, falling back to defaults.
pub fn load_config_in(start: PathBuf, user_config: Option<&Path>) -> StandchartConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .or_else(|| user_config.and_then(try_load_config_from_path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH + 1
            );
            StandchartConfig::default()
        })
}

pub fn load_config() -> StandchartConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return StandchartConfig::default();
        }
    };

    load_config_in(current, user_config_path().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::OverflowPolicy;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SAMPLE: &str = indoc! {r##"
        catalog_path = "stands.json"

        [chart]
        width = 600
        fill = "#00ff0080"

        [matching]
        overflow = "reject"
    "##};

    #[test]
    fn test_parse_sample_config() {
        let config = parse_and_validate_config(SAMPLE).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("stands.json")));
        assert_eq!(config.chart.as_ref().and_then(|c| c.width), Some(600));
        assert_eq!(config.overflow_policy(), OverflowPolicy::Reject);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let err = parse_and_validate_config("[chart]\nwidth = 10\n").unwrap_err();
        assert!(err.to_string().contains("chart.width"));
        assert!(parse_and_validate_config("[chart\n").is_err());
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn test_load_finds_config_in_ancestor() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), SAMPLE).unwrap();

        let config = load_config_in(nested, None);
        assert_eq!(config.catalog_path, Some(root.path().join("stands.json")));
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "[labels]\nlevels = [\"x\"]\n").unwrap();

        let config = load_config_in(root.path().to_path_buf(), None);
        assert_eq!(config, StandchartConfig::default());
    }

    #[test]
    fn test_user_config_used_when_no_project_file() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let user_file = user.path().join("config.toml");
        fs::write(&user_file, "[parser]\nhost = \"charts.example.com\"\n").unwrap();

        let config = load_config_in(project.path().to_path_buf(), Some(&user_file));
        assert_eq!(
            config.parser.map(|p| p.host),
            Some("charts.example.com".to_string())
        );
    }

    #[test]
    fn test_explicit_config_errors_are_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            load_config_from(&missing),
            Err(Error::Configuration(_))
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "catalog_path = 3\n").unwrap();
        assert!(load_config_from(&broken).is_err());
    }

    #[test]
    fn test_explicit_config_resolves_catalog_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.catalog_path(), Some(dir.path().join("stands.json").as_path()));
    }
}
