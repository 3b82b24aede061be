use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sql_broker::BrokerError;
use sql_broker::mysql::MySqlSettings;
use sql_broker::scripts::ScriptSections;

/// CLI configuration file (`sql-broker.json` by default).
#[derive(Debug, Deserialize)]
pub struct CliConfig {
    /// Base directory the script sections resolve against.
    pub cwd: PathBuf,
    #[serde(default)]
    pub scripts: ScriptSections,
    /// Pool used by scaffold/run.
    pub pool: MySqlSettings,
    /// Admin-capable pool, required by build/adduser/grant.
    #[serde(default)]
    pub admin_pool: Option<MySqlSettings>,
    /// When true, provisioned accounts get scope `%` instead of
    /// `localhost`.
    #[serde(default)]
    pub remote: bool,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, BrokerError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BrokerError::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&contents)
            .map_err(|e| BrokerError::Config(format!("{}: {e}", path.display())))
    }

    pub fn scope(&self) -> &'static str {
        if self.remote { "%" } else { "localhost" }
    }

    pub fn admin_pool(&self) -> Result<&MySqlSettings, BrokerError> {
        self.admin_pool
            .as_ref()
            .ok_or_else(|| BrokerError::Config("no admin_pool configured".to_string()))
    }
}
