// Configuration file: mask character and per-language word sources

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CliError;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "UGU_CENSOR_CONFIG";

/// File name looked up in the working directory.
const LOCAL_CONFIG: &str = "ugu-censor.toml";

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mask: Option<char>,

    #[serde(default, rename = "language")]
    pub languages: Vec<LanguageConfig>,

    /// Directory of the file this was loaded from; word list paths are
    /// relative to it.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Word sources for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub code: String,

    #[serde(default = "default_stemming")]
    pub stemming: bool,

    #[serde(default)]
    pub words: Vec<String>,

    #[serde(default)]
    pub word_lists: Vec<PathBuf>,
}

fn default_stemming() -> bool {
    true
}

impl Config {
    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        for language in &config.languages {
            if language.code.trim().is_empty() {
                return Err(CliError::InvalidLanguage {
                    path: path.to_path_buf(),
                });
            }
        }
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Load the first configuration file found.
    ///
    /// Search order:
    /// 1. `explicit` argument (must exist)
    /// 2. `UGU_CENSOR_CONFIG` environment variable
    /// 3. The platform configuration directory (`.../ugu-censor/config.toml`)
    /// 4. `ugu-censor.toml` in the current directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Option<Self>, CliError> {
        if let Some(path) = explicit {
            return Self::from_file(path).map(Some);
        }
        for path in search_paths() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading configuration");
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Word list path resolved against the configuration directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Build the list of candidate configuration files.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "ugu-censor") {
        paths.push(dirs.config_dir().join("config.toml"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_CONFIG));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: Config = toml::from_str(
            r##"
            mask = "#"

            [[language]]
            code = "ru"
            words = ["игра", "яблоко"]
            word_lists = ["ru.txt"]

            [[language]]
            code = "en"
            stemming = false
            "##,
        )
        .expect("valid config");

        assert_eq!(config.mask, Some('#'));
        assert_eq!(config.languages.len(), 2);
        assert_eq!(config.languages[0].code, "ru");
        assert!(config.languages[0].stemming);
        assert_eq!(config.languages[0].words, ["игра", "яблоко"]);
        assert_eq!(config.languages[0].word_lists, [PathBuf::from("ru.txt")]);
        assert!(!config.languages[1].stemming);
        assert!(config.languages[1].words.is_empty());
    }

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml::from_str("").expect("empty config");
        assert_eq!(config, Config::default());
        assert_eq!(config.mask, None);
    }

    #[test]
    fn multi_char_mask_is_rejected() {
        assert!(toml::from_str::<Config>(r#"mask = "**""#).is_err());
    }

    #[test]
    fn resolve_relative_to_base_dir() {
        let config = Config {
            base_dir: PathBuf::from("/etc/ugu"),
            ..Config::default()
        };
        assert_eq!(
            config.resolve(Path::new("ru.txt")),
            PathBuf::from("/etc/ugu/ru.txt")
        );
        assert_eq!(
            config.resolve(Path::new("/tmp/en.txt")),
            PathBuf::from("/tmp/en.txt")
        );
    }
}
