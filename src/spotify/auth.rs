use reqwest::{Client, StatusCode};

use crate::{
    config::Config,
    error::{Error, Result},
    types::Token,
};

/// Exchanges the application's client credentials for a bearer token.
///
/// Performs the OAuth 2.0 client-credentials grant against the configured
/// token endpoint: a form-encoded POST carrying `grant_type`, `client_id` and
/// `client_secret`. No user interaction or callback server is involved.
///
/// # Arguments
///
/// * `config` - Validated configuration holding the credentials and token URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Freshly issued bearer token
/// - `Err(Error::Authentication)` - The endpoint answered with a non-200
///   status; the error carries the status code and the response body
/// - `Err(Error::Http)` - Network failure or malformed response body
///
/// # Token Lifecycle
///
/// The token is short-lived and its expiry is enforced by the remote service.
/// It is used for the fetch that follows and then dropped; there is no cache,
/// no refresh and no persistence. A single transient failure surfaces
/// immediately to the caller.
///
/// # Example
///
/// ```
/// let config = Config::from_env()?;
/// let token = request_token(&config).await?;
/// println!("bearer: {}", token.access_token);
/// ```
pub async fn request_token(config: &Config) -> Result<Token> {
    let client = Client::new();
    let response = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Authentication { status, body });
    }

    let token = response.json::<Token>().await?;
    Ok(token)
}
