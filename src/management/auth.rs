use std::path::PathBuf;

use chrono::Utc;

use crate::{Error, Res, config, spotify, types::Token, warning};

/// Refresh this many seconds before the token actually expires.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Loads the token saved by `kworblist auth`.
    pub async fn load() -> Res<Self> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path).await.map_err(|e| {
            Error::Auth(format!(
                "no saved token at {} ({}). Please run kworblist auth",
                path.display(),
                e
            ))
        })?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Res<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns an access token, refreshing and re-saving it first if it is
    /// about to expire. A failed refresh falls back to the current token and
    /// lets the API reject it.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            match spotify::auth::refresh_token(&self.token.refresh_token).await {
                Ok(new_token) => {
                    self.token = new_token;
                    if let Err(e) = self.persist().await {
                        warning!("Failed to save refreshed token: {}", e);
                    }
                }
                Err(e) => warning!("Failed to refresh token: {}", e),
            }
        }

        self.token.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}
