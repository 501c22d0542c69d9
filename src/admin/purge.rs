use log::{error, info};
use reqwest::Client;

use crate::conf::AdminConfig;
use crate::core::HeadlessError;

/// Environment variable holding the admin auth token.
pub const AUTH_TOKEN_ENV: &str = "AEM_AUTH_TOKEN";

/// Clear the Edge Delivery cache via the admin endpoint.
///
/// One POST, no retries. The token comes from [`AUTH_TOKEN_ENV`]; the
/// response body is logged either way.
pub async fn purge_cache(conf: &AdminConfig) -> Result<(), HeadlessError> {
    let token = std::env::var(AUTH_TOKEN_ENV)
        .map_err(|_| HeadlessError::PurgeError(format!("{AUTH_TOKEN_ENV} is not set")))?;
    purge_cache_with_token(conf, &token).await
}

pub async fn purge_cache_with_token(
    conf: &AdminConfig,
    token: &str,
) -> Result<(), HeadlessError> {
    let url = conf
        .purge_url
        .as_deref()
        .ok_or_else(|| HeadlessError::PurgeError(String::from("no admin.purge_url configured")))?;

    let client = Client::new();
    let response = client
        .post(url)
        .header("User-Agent", &conf.user_agent)
        .header("x-hlx-auth", token)
        .send()
        .await
        .map_err(|e| HeadlessError::PurgeError(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status.is_success() {
        info!("cache cleared: {body}");
        Ok(())
    } else {
        error!("failed to clear cache: HTTP {status}: {body}");
        Err(HeadlessError::PurgeError(format!(
            "HTTP {}: {body}",
            status.as_u16()
        )))
    }
}
