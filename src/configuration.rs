use std::path::Path;
use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;

/// Which remote call a smoke run makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Balance,
    CreateAccount,
    GetAccount,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub service: ServiceSettings,
    pub smoke: SmokeSettings,
}

/// Where the ILP service lives and how long we are willing to wait for it.
#[derive(Deserialize, Debug, Clone)]
pub struct ServiceSettings {
    pub host: String,
    pub port: u16,
    pub connect_timeout_millis: u64,
    pub request_timeout_millis: u64,
    pub auth_token: Option<Secret<String>>,
}

impl ServiceSettings {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_millis)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_millis)
    }
}

/// The single call a smoke run makes and the account it targets.
#[derive(Deserialize, Debug, Clone)]
pub struct SmokeSettings {
    pub operation: Operation,
    pub account_id: String,
    pub asset_code: String,
    pub asset_scale: u32,
    pub description: String,
    pub fail_on_error: bool,
}

/// Read settings from the compiled defaults, then `file` (if it exists),
/// then `APP_*` environment variables, e.g. `APP_SERVICE__PORT=7000`.
pub fn get_configuration(file: Option<&Path>) -> Result<Settings, config::ConfigError> {
    load(
        file,
        config::Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__"),
    )
}

fn load(
    file: Option<&Path>,
    environment: config::Environment,
) -> Result<Settings, config::ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("service.host", "127.0.0.1")?
        .set_default("service.port", 6565_i64)?
        .set_default("service.connect_timeout_millis", 5_000_i64)?
        .set_default("service.request_timeout_millis", 10_000_i64)?
        .set_default("smoke.operation", "balance")?
        .set_default("smoke.account_id", "demo_user")?
        .set_default("smoke.asset_code", "XRP")?
        .set_default("smoke.asset_scale", 9_i64)?
        .set_default("smoke.description", "Smoke test account")?
        .set_default("smoke.fail_on_error", false)?;

    if let Some(file) = file {
        builder = builder.add_source(config::File::from(file).required(false));
    }

    builder
        .add_source(environment.try_parsing(true))
        .build()?
        .try_deserialize::<Settings>()
}
