//! Engine tuning loader.

use std::path::Path;

use agent_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`EngineConfig`] from TOML files.
///
/// Every key is optional; missing keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate engine tuning from a TOML file.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("in {}", path.display())))
    }

    /// Parse and validate engine tuning from TOML text.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse engine config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cast_chance = 0.9\n\n[cooldowns]\nbuy = 5").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert!((config.cast_chance - 0.9).abs() < 1e-6);
        assert_eq!(config.cooldowns.buy, 5);
        assert_eq!(config.cooldowns.scan, 2);
        assert_eq!(config.loop_max_repeats, 3);
    }

    #[test]
    fn invalid_tuning_is_rejected() {
        let err = ConfigLoader::parse("cast_chance = 1.5").unwrap_err();
        assert!(err.to_string().contains("cast_chance"), "{err}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/engine.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/engine.toml"));
    }

    #[test]
    fn bundled_config_loads() {
        let config = ConfigLoader::load(&crate::data_dir().join("engine.toml")).unwrap();
        let defaults = EngineConfig::default();
        assert_eq!(config.cooldowns, defaults.cooldowns);
        assert_eq!(config.log_scan_window, defaults.log_scan_window);
        assert!((config.inquiry_factor - defaults.inquiry_factor).abs() < 1e-6);
    }
}
