use crate::domain::calendar::DatePolicy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
    #[serde(default)]
    pub charts: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    /// Directory URL holding `index.json` and the per-package summaries
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChartSettings {
    #[serde(default)]
    pub date_policy: DatePolicy,
}

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// `config/ppastats.{toml,yaml,json}` if present, then `PPASTATS__SECTION__KEY` overrides.
pub fn load_config() -> anyhow::Result<AppConfig> {
    build_config(
        config::File::with_name("config/ppastats").required(false),
        environment(),
    )
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("PPASTATS").separator("__")
}

fn build_config<S>(file: S, environment: config::Environment) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.bind_address", DEFAULT_BIND_ADDRESS)?
        .add_source(file)
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize()?)
}
