use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub file: FileSettings,
    pub http: HttpSettings,
}

#[derive(Deserialize)]
pub struct FileSettings {
    pub source_data: String,
    pub output_data: String,
}

#[derive(Deserialize)]
pub struct HttpSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
}

/// Loads settings from `Settings.toml` (optional) and `APP_`-prefixed
/// environment variables, on top of built-in defaults. With no settings
/// file and no environment the defaults apply as-is.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .set_default("file.source_data", "urls.csv")?
        .set_default("file.output_data", "urls-with-titles.csv")?
        .set_default(
            "http.user_agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        )?
        .set_default("http.timeout_secs", 10)?
        .add_source(File::new("Settings.toml", FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    settings.try_deserialize::<Settings>()
}
