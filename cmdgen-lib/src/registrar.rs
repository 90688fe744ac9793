use crate::error::{RegisterError, Result};
use crate::secrets::Secrets;
use reqwest::{
    StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
use std::{borrow::Cow, path::Path};

/// The versioned REST root commands are registered against.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v8";

const USER_AGENT: &str = concat!("DiscordBot (cmdgen, ", env!("CARGO_PKG_VERSION"), ")");

/// What the platform sent back for a single registration.
#[derive(Debug, Clone)]
pub struct Submission {
    pub status: StatusCode,
    /// The body exactly as received.
    pub body: Vec<u8>,
}

impl Submission {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json(&self) -> Result<Value> {
        serde_json::from_slice(&self.body).map_err(RegisterError::MalformedResponse)
    }
}

/// Posts command definitions to the platform's registration endpoint.
pub struct Registrar {
    client: reqwest::Client,
    api_base: String,
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Registrar {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_base)
    }

    pub fn with_client(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_owned();

        Self { client, api_base }
    }

    /// Global commands live under the application, guild commands under the guild.
    pub fn endpoint(&self, secrets: &Secrets) -> String {
        match &secrets.guild_id {
            Some(guild_id) => format!(
                "{}/applications/{}/guilds/{}/commands",
                self.api_base, secrets.app_id, guild_id
            ),
            None => format!("{}/applications/{}/commands", self.api_base, secrets.app_id),
        }
    }

    /// Sends the contents of `command_file` untouched. Any status is a
    /// successful submission here; judging it is left to the caller.
    pub async fn register(&self, secrets: &Secrets, command_file: &Path) -> Result<Submission> {
        let definition = std::fs::read(command_file).map_err(|source| RegisterError::Input {
            path: command_file.to_owned(),
            source,
        })?;

        let url = self.endpoint(secrets);

        tracing::info!("Registering {} at {}", command_file.display(), url);
        tracing::debug!("Request body is {} bytes", definition.len());

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bot {}", secrets.token))
            .header(CONTENT_TYPE, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .body(definition)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        tracing::info!("Platform answered {}", status);

        Ok(Submission { status, body })
    }
}
