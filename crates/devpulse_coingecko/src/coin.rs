use crate::method::Method;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEVELOPER_DATA: &str = "developer_data";
pub const COMMUNITY_DATA: &str = "community_data";

/// Query for `coins/{id}`. Defaults ask only for the developer and community
/// sections.
#[derive(Serialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct CoinParams {
    #[serde(skip)]
    pub id: String,
    #[builder(default = false)]
    pub localization: bool,
    #[builder(default = false)]
    pub tickers: bool,
    #[builder(default = false)]
    pub market_data: bool,
    #[builder(default = true)]
    pub community_data: bool,
    #[builder(default = true)]
    pub developer_data: bool,
    #[builder(default = false)]
    pub sparkline: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Remaining top-level fields in response order, kept raw so nested
    /// sections can be flattened without a fixed schema.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CoinDetail {
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn developer_data(&self) -> Option<&Value> {
        self.section(DEVELOPER_DATA)
    }

    pub fn community_data(&self) -> Option<&Value> {
        self.section(COMMUNITY_DATA)
    }
}

pub struct Coin;

impl Method for Coin {
    type Response = CoinDetail;
    type Params = CoinParams;

    fn path(params: &Self::Params) -> String {
        format!("coins/{}", params.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_default_to_developer_and_community_sections() {
        let params = CoinParams::builder().id("bitcoin").build();

        assert_eq!(Coin::path(&params), "coins/bitcoin");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "localization": false,
                "tickers": false,
                "market_data": false,
                "community_data": true,
                "developer_data": true,
                "sparkline": false,
            })
        );
    }

    #[test]
    fn detail_keeps_sections_in_response_order() {
        let body = r#"{
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "community_data": {"twitter_followers": null, "reddit_subscribers": 500},
            "developer_data": {"forks": 120, "stars": 340, "closed_issues": 2, "total_issues": 3}
        }"#;

        let detail: CoinDetail = serde_json::from_str(body).unwrap();

        assert_eq!(detail.id, "ethereum");
        assert_eq!(detail.name, "Ethereum");
        assert_eq!(
            detail.fields.keys().collect::<Vec<_>>(),
            vec![COMMUNITY_DATA, DEVELOPER_DATA]
        );

        let developer = detail.developer_data().and_then(Value::as_object).unwrap();
        assert_eq!(
            developer.keys().collect::<Vec<_>>(),
            vec!["forks", "stars", "closed_issues", "total_issues"]
        );
        assert!(detail.section("market_data").is_none());
    }
}
