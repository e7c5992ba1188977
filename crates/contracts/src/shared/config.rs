use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// One of: error, warn, info, debug, trace
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_title() -> String {
    "监管信息系统".to_string()
}

fn default_level() -> String {
    "debug".to_string()
}

fn default_page_size() -> usize {
    5
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 20]
}

impl Default for AppSection {
    fn default() -> Self {
        Self { title: default_title() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
title = "监管信息系统"

[logging]
level = "debug"

[table]
page_size = 5
page_size_options = [5, 10, 20]
"#;

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<AppConfig> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.table.page_size == 0 {
            anyhow::bail!("table.page_size must be greater than zero");
        }
        Ok(config)
    }

    /// `log::Level` for the configured name, `Debug` when unknown
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Load configuration.
///
/// `override_toml` is an optional user-supplied TOML document (the frontend
/// reads it from browser storage); otherwise the embedded default is used.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    match override_toml {
        Some(contents) => {
            log::info!("Loading config from override");
            AppConfig::from_toml_str(contents)
        }
        None => {
            log::info!("Using default embedded configuration");
            AppConfig::from_toml_str(DEFAULT_CONFIG)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_matches_struct_default() {
        let config = load_config(None).expect("default config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = load_config(Some("[table]\npage_size = 10\n")).unwrap();
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.table.page_size_options, vec![5, 10, 20]);
        assert_eq!(config.app.title, "监管信息系统");
    }

    #[test]
    fn log_level_parses_names() {
        let config = load_config(Some("[logging]\nlevel = \"warn\"\n")).unwrap();
        assert_eq!(config.log_level(), log::Level::Warn);

        let config = load_config(Some("[logging]\nlevel = \"loud\"\n")).unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(load_config(Some("[table\npage_size = ")).is_err());
        assert!(load_config(Some("[table]\npage_size = 0\n")).is_err());
    }
}
