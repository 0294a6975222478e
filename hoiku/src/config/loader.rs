//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the user configuration file inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "hoiku.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user and project files.
///
/// # Examples
///
/// ```no_run
/// use hoiku::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. `<data_dir>/config.yaml` (precedence 1), where `data_dir` defaults
    ///    to `~/.hoiku`
    /// 2. `hoiku.yaml`, walking up from `working_dir` (precedence 2)
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user) = Self::load_user_config(data_dir)? {
            sources.push(user);
        }
        if let Some(project) = Self::discover_project_config(working_dir)? {
            sources.push(project);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let path = match data_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match crate::database::default_data_dir() {
                Ok(dir) => dir.join(USER_CONFIG_FILE),
                Err(e) => {
                    log::debug!("skipping user config: {e}");
                    return Ok(None);
                }
            },
        };

        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Finds the nearest `hoiku.yaml` at or above `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::ConfigFile`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        log::debug!("loading configuration from {}", path.display());

        if is_blank_document(&contents) {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

// Whitespace and comments only; serde_yaml rejects such a document for a
// struct.
fn is_blank_document(contents: &str) -> bool {
    contents
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yaml");
        fs::write(&path, "view: [unclosed").unwrap();

        match ConfigLoader::load_file(&path) {
            Err(Error::ConfigFile { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ConfigFile error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(ConfigLoader::load_file(&path).unwrap(), Config::default());

        fs::write(&path, "# only comments\n#   output_format: csv\n").unwrap();
        assert_eq!(ConfigLoader::load_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "output_format: csv\n").unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let source = ConfigLoader::discover_project_config(&nested)
            .unwrap()
            .unwrap();
        assert_eq!(source.precedence, 2);
        assert_eq!(source.path, temp.path().join(PROJECT_CONFIG_FILE));
        assert_eq!(source.config.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_discover_stops_at_nearest() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "output_format: csv\n").unwrap();
        let nested = temp.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(PROJECT_CONFIG_FILE), "output_format: json\n").unwrap();

        let source = ConfigLoader::discover_project_config(&nested)
            .unwrap()
            .unwrap();
        assert_eq!(source.config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_load_all_orders_by_precedence() {
        let data = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(data.path().join(USER_CONFIG_FILE), "output_format: tsv\n").unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "output_format: json\n").unwrap();

        let sources = ConfigLoader::load_all(project.path(), Some(data.path())).unwrap();
        let precedences: Vec<u8> = sources.iter().map(|s| s.precedence).collect();
        assert_eq!(precedences, [1, 2]);
        assert_eq!(sources[0].config.output_format, Some(OutputFormat::Tsv));
    }

    #[test]
    fn test_load_all_without_files() {
        let data = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let sources = ConfigLoader::load_all(project.path(), Some(data.path())).unwrap();
        assert!(sources.is_empty());
    }
}
