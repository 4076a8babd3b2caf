use crate::domain::model::WordId;
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            accept_invalid_certs: false,
            user_agent: None,
        }
    }
}

/// 每個編號發出一次 GET，不重試
pub struct HttpPageSource {
    base_url: String,
    client: Client,
}

impl HttpPageSource {
    pub fn new(base_url: impl Into<String>, settings: &HttpSettings) -> Result<Self> {
        if settings.accept_invalid_certs {
            tracing::warn!("⚠️ TLS certificate verification is disabled");
        }

        let mut builder = Client::builder()
            .timeout(settings.timeout)
            .danger_accept_invalid_certs(settings.accept_invalid_certs);
        if let Some(user_agent) = &settings.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self {
            base_url: base_url.into(),
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, id: WordId) -> Result<String> {
        let id = id.to_string();
        tracing::debug!("GET {}?id={}", self.base_url, id);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("id", id.as_str())])
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("API response status: {}", response.status());
        Ok(response.text().await?)
    }
}
