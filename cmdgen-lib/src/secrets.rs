use crate::error::{RegisterError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the secrets live when `CMDGEN_SECRETS` isn't set.
pub const DEFAULT_SECRETS_PATH: &str = "../src/ReplicatorBot/secrets.json";

/// The bot's credentials, shared with the bot's own `secrets.json`.
///
/// Any other keys in the file are ignored.
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct Secrets {
    /// The bot token. Sent as `Authorization: Bot <token>`.
    #[serde(rename = "Token")]
    pub token: String,
    /// The application the command is registered under.
    #[serde(rename = "AppId")]
    pub app_id: String,
    /// The directory command records are written to.
    #[serde(rename = "CommandGenOutputPath")]
    pub output_path: PathBuf,
    /// Register as a guild command instead of a global one.
    #[serde(rename = "GuildId", default)]
    pub guild_id: Option<String>,
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("token", &"[REDACTED]")
            .field("app_id", &self.app_id)
            .field("output_path", &self.output_path)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

impl Secrets {
    /// Reads and validates the secrets file.
    pub fn create_from_file(secrets_path: impl AsRef<Path>) -> Result<Secrets> {
        let secrets_path = secrets_path.as_ref();

        let file = std::fs::read_to_string(secrets_path)
            .map_err(|e| RegisterError::config(secrets_path, e))?;

        let secrets =
            Secrets::from_json(&file).map_err(|e| RegisterError::config(secrets_path, e))?;

        tracing::info!(
            "Loaded secrets for application {} from {}",
            secrets.app_id,
            secrets_path.display()
        );

        Ok(secrets)
    }

    fn from_json(json: &str) -> std::result::Result<Secrets, String> {
        let secrets: Secrets = serde_json::from_str(json).map_err(|e| e.to_string())?;

        if secrets.token.is_empty() {
            return Err("`Token` is empty".to_owned());
        }
        if secrets.app_id.is_empty() {
            return Err("`AppId` is empty".to_owned());
        }

        Ok(secrets)
    }
}
