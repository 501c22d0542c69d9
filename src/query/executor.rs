use chrono::Utc;
use log::{debug, error};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::conf::AemConfig;
use crate::core::HeadlessError;

use super::{QueryParams, QueryRef};

/// Response envelope of the AEM GraphQL execute endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlMessage {
    #[serde(default)]
    message: String,
}

/// Executes persisted GraphQL queries against one AEM backend origin.
///
/// Stateless per call: one GET, no retries. Every failure mode comes back
/// as a [`HeadlessError`], never a panic, so callers branch on the Result.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    client: Client,
    conf: AemConfig,
    host: String,
}

impl QueryExecutor {
    /// Executor talking to the host that serves `current_hostname`'s pages:
    /// the authoring origin inside the editor, the publish origin elsewhere.
    pub fn for_hostname(conf: AemConfig, current_hostname: &str) -> Self {
        let host = conf.select_host(current_hostname).to_string();
        Self::with_host(conf, host)
    }

    /// Executor pinned to the public delivery origin.
    pub fn publish(conf: AemConfig) -> Self {
        let host = conf.publish_host.clone();
        Self::with_host(conf, host)
    }

    fn with_host(conf: AemConfig, host: String) -> Self {
        Self {
            client: Client::new(),
            conf,
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn build_url(&self, query: &QueryRef, params: &QueryParams) -> String {
        format!(
            "{}{}/{}{}",
            self.host,
            self.conf.graphql_path,
            query,
            params.to_path_segments()
        )
    }

    /// Run a persisted query and return the envelope's `data` member.
    ///
    /// `data` may be `Value::Null` when the backend found no match; that is
    /// a successful call, not an error.
    pub async fn execute(
        &self,
        query: &QueryRef,
        params: &QueryParams,
    ) -> Result<Value, HeadlessError> {
        let mut params = params.clone();
        if self.conf.disable_cache {
            params.push("timestamp", Utc::now().timestamp_millis());
        }

        let url = self.build_url(query, &params);
        debug!("running GraphQL query: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.read_envelope(response).await
    }

    /// POST a literal GraphQL document to the execute endpoint.
    ///
    /// Fallback for instances where the persisted query is not installed;
    /// same envelope and error handling as [`execute`](Self::execute).
    pub async fn execute_post(
        &self,
        query: &QueryRef,
        document: &str,
        variables: Value,
    ) -> Result<Value, HeadlessError> {
        let url = format!("{}{}/{}", self.host, self.conf.graphql_path, query);
        debug!("posting GraphQL document to: {url}");

        let body = serde_json::json!({ "query": document, "variables": variables });
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.read_envelope(response).await
    }

    async fn read_envelope(&self, response: Response) -> Result<Value, HeadlessError> {
        let status = response.status();
        if !status.is_success() {
            error!("GraphQL request failed: HTTP status {}", status.as_u16());
            return Err(HeadlessError::HttpStatus(status.as_u16()));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !envelope.errors.is_empty() {
            let joined = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            error!("GraphQL request failed: {joined}");
            return Err(HeadlessError::Graphql(joined));
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }

    fn transport_error(&self, err: reqwest::Error) -> HeadlessError {
        error!("GraphQL request failed: {err}");
        HeadlessError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor(disable_cache: bool) -> QueryExecutor {
        let conf = AemConfig {
            disable_cache,
            ..AemConfig::default()
        };
        QueryExecutor::publish(conf)
    }

    #[test]
    fn test_build_url() {
        let exec = executor(false);
        let query = QueryRef::new("wknd-shared", "adventure-by-path");
        let params = QueryParams::new().with("adventurePath", "/content/dam/x");
        assert_eq!(
            exec.build_url(&query, &params),
            format!(
                "{}/graphql/execute.json/wknd-shared/adventure-by-path;adventurePath=/content/dam/x",
                exec.host()
            )
        );
    }

    #[test]
    fn test_host_trailing_slash_is_trimmed() {
        let conf = AemConfig {
            publish_host: String::from("https://publish.example.com/"),
            ..AemConfig::default()
        };
        let exec = QueryExecutor::publish(conf);
        assert_eq!(exec.host(), "https://publish.example.com");
    }
}
