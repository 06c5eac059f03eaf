//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "multiedit";
const PROJECT_FILES: &[&str] = &["multiedit.toml", ".multiedit.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./multiedit.toml` or `./.multiedit.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/multiedit/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
    }

    /// Merge the given files over the defaults, lowest priority first.
    /// Missing global and project files are skipped; a missing explicit
    /// file is an error.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/multiedit/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./multiedit.toml or ./.multiedit.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiedit_domain::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.fallback.enabled);
        assert_eq!(config.fallback.target_window, 5);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("multiedit"));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let missing = Some(missing.as_path());
        let config = ConfigLoader::load_from(missing, missing, None).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_priority_order() {
        let dir = TempDir::new().unwrap();
        let global = write(
            &dir,
            "global.toml",
            "[fallback]\ntarget_window = 2\nenabled = false\n[output]\nformat = \"list\"\n",
        );
        let project = write(&dir, "project.toml", "[fallback]\ntarget_window = 3\n");
        let explicit = write(&dir, "explicit.toml", "[output]\nformat = \"json\"\n");

        let config = ConfigLoader::load_from(
            Some(global.as_path()),
            Some(project.as_path()),
            Some(explicit.as_path()),
        )
        .unwrap();
        assert_eq!(config.fallback.target_window, 3);
        assert!(!config.fallback.enabled);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_vocabulary_lists_from_file() {
        let dir = TempDir::new().unwrap();
        let explicit = write(
            &dir,
            "multiedit.toml",
            "[vocabulary]\ncolors = [\"天蓝色\"]\nobjects = [\"pyramid\"]\n",
        );
        let config = ConfigLoader::load_from(None, None, Some(explicit.as_path())).unwrap();
        assert_eq!(config.vocabulary.colors, vec!["天蓝色"]);
        assert_eq!(config.vocabulary.objects, vec!["pyramid"]);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ConfigLoader::load_from(None, None, Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.toml", "[fallback]\ntarget_window = \"many\"\n");
        assert!(ConfigLoader::load_from(None, None, Some(bad.as_path())).is_err());
    }
}
