use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    Error, Res, config, info,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// Longest time to wait for the browser to come back to the callback server.
const CALLBACK_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs the OAuth 2.0 PKCE flow and persists the resulting token.
///
/// 1. Generates a code verifier and its S256 challenge
/// 2. Starts the local callback server on `SERVER_ADDRESS`
/// 3. Opens the authorization URL in the browser (prints it if that fails)
/// 4. Waits up to 60 seconds for the callback to exchange the code
/// 5. Saves the token through [`TokenManager`]
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = config::spotify_apiauth_url(),
        client_id = config::spotify_client_id()?,
        redirect_uri = config::spotify_redirect_uri()?,
        code_challenge = code_challenge,
        scope = config::spotify_scope().replace(' ', "%20"),
    );

    // verifier must be in place before the browser can hit the callback
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_addr = config::server_addr()?;
    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move { start_api_server(&server_addr, server_state).await });

    info!("Waiting for Spotify authorization...");
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = match wait_for_token(shared_state, &server).await {
        Some(token) => {
            server.abort();
            token
        }
        None if server.is_finished() => {
            return match server.await {
                Ok(Err(e)) => Err(e),
                _ => Err(Error::Auth("callback server stopped unexpectedly".into())),
            };
        }
        None => {
            server.abort();
            return Err(Error::Auth("authentication failed or timed out".into()));
        }
    };
    TokenManager::new(token).persist().await?;

    success!("Authentication successful!");
    Ok(())
}

/// Polls the shared state once a second until the callback stored a token.
///
/// Gives up with `None` after 60 seconds, or as soon as the
/// callback `server` task has stopped (e.g. it could not bind its address).
pub async fn wait_for_token(
    shared_state: Arc<Mutex<Option<PkceToken>>>,
    server: &JoinHandle<Res<()>>,
) -> Option<Token> {
    let start = std::time::Instant::now();

    while start.elapsed() < CALLBACK_TIMEOUT {
        {
            let lock = shared_state.lock().await;
            if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.clone()) {
                return Some(token);
            }
        }
        if server.is_finished() {
            return None;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code and its PKCE verifier for a token.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri()?;

    let response = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: TokenResponse = response.json().await?;
    let refresh_token = body
        .refresh_token
        .clone()
        .ok_or_else(|| Error::Auth("token response carried no refresh token".into()))?;

    Ok(into_token(body, refresh_token))
}

/// Trades a refresh token for a fresh access token. Spotify may or may not
/// rotate the refresh token; the old one is kept when it does not.
pub async fn refresh_token(refresh_token: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;

    let response = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: TokenResponse = response.json().await?;
    let rotated = body
        .refresh_token
        .clone()
        .unwrap_or_else(|| refresh_token.to_string());

    Ok(into_token(body, rotated))
}

fn into_token(body: TokenResponse, refresh_token: String) -> Token {
    Token {
        access_token: body.access_token,
        refresh_token,
        scope: body.scope,
        expires_in: body.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    }
}
