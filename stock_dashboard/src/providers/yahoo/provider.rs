use async_trait::async_trait;
use reqwest::{Client, header};
use snafu::{ResultExt, ensure};
use tracing::{debug, info};

use crate::{
    config::ProviderConfig,
    models::{price_series::PriceSeries, request_params::LoadRequest},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, DecodeSnafu, EmptyBaseUrlSnafu,
        InvalidUserAgentSnafu, ProviderError, ProviderInitError, ReqwestSnafu, ValidationSnafu,
        yahoo::{params::construct_params, response::ChartEnvelope},
    },
};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// Creates a new Yahoo provider from the `[provider]` config section.
    ///
    /// The chart endpoint rejects requests without a browser-like
    /// `User-Agent`, so one is always installed as a default header.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderInitError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        ensure!(!base_url.is_empty(), EmptyBaseUrlSnafu);

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent).context(InvalidUserAgentSnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol.trim())
    }
}

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_daily_bars(&self, request: &LoadRequest) -> Result<PriceSeries, ProviderError> {
        ensure!(
            !request.symbol.trim().is_empty(),
            ValidationSnafu {
                message: "ticker symbol must not be empty",
            }
        );

        let url = self.chart_url(&request.symbol);
        let query = construct_params(request);
        info!(symbol = %request.symbol, start = %request.start, end = %request.end, "fetching daily bars");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;
        let status = response.status();
        let body = response.text().await.context(ReqwestSnafu)?;
        debug!(%status, bytes = body.len(), "chart response received");

        // Unknown symbols come back as 404 with a regular `chart.error`
        // envelope; only a body we cannot read at all is an API error.
        let envelope = match serde_json::from_str::<ChartEnvelope>(&body) {
            Ok(envelope) => envelope,
            Err(source) if status.is_success() => return Err(source).context(DecodeSnafu),
            Err(_) => {
                return ApiSnafu {
                    status: status.as_u16(),
                    message: body,
                }
                .fail();
            }
        };

        Ok(envelope.into_series(&request.symbol))
    }
}
