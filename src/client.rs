//! Top-level client bundling the per-resource API clients.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpTransport;
use crate::llm_config::LlmConfigClient;
use crate::prompts::PromptClient;

/// Entry point for the WHartTest API.
///
/// Cheap to clone; all resource clients share one connection pool.
///
/// ```no_run
/// use wharttest_client::{ClientConfig, WhartClient};
///
/// # async fn run() -> wharttest_client::Result<()> {
/// let config = ClientConfig::new("https://host/api").with_bearer_token("token");
/// let client = WhartClient::new(&config)?;
///
/// let configs = client.llm_configs().list().await;
/// if let Some(configs) = configs.data() {
///     println!("{} configurations", configs.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WhartClient {
    http: HttpTransport,
}

impl WhartClient {
    /// Build a client from configuration. Fails on an invalid base URL.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpTransport::new(config)?,
        })
    }

    /// LLM-configuration operations.
    pub fn llm_configs(&self) -> LlmConfigClient {
        LlmConfigClient::new(self.http.clone())
    }

    /// User-prompt lookups.
    pub fn prompts(&self) -> PromptClient {
        PromptClient::new(self.http.clone())
    }
}
