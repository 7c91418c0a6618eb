pub mod coin;
pub mod coins_list;
pub mod error;
pub mod method;

pub use error::CoingeckoError;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

// Base URL for the public CoinGecko API
pub const BASE_URL: &str = "https://api.coingecko.com/api/v3";

const API_KEY_HEADER: &str = "x-cg-demo-api-key";
const USER_AGENT: &str = concat!("devpulse/", env!("CARGO_PKG_VERSION"));

pub struct CoingeckoClient {
    base_url: String,
    reqwest: Client,
}

impl CoingeckoClient {
    pub fn new(api_key: Option<&str>) -> Result<Self, CoingeckoError> {
        Self::with_base_url(BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: Option<&str>) -> Result<Self, CoingeckoError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(api_key) = api_key {
            default_headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
        }

        let reqwest = ClientBuilder::new()
            .default_headers(default_headers)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            reqwest,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<T, CoingeckoError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.reqwest.get(&url).query(params).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(CoingeckoError::RateLimited(url));
        }

        let body = response.error_for_status()?.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn call<M: method::Method>(
        &self,
        params: M::Params,
    ) -> Result<M::Response, CoingeckoError> {
        self.get(&M::path(&params), &params).await
    }
}
