use crate::method::Method;
use devpulse_shared_models::CoinListEntry;
use serde::Serialize;

/// `coins/list` takes no query parameters.
#[derive(Serialize, Debug, Default)]
pub struct CoinsListParams {}

/// Every coin the API knows about, as `{id, symbol, name}` rows.
pub struct CoinsList;

impl Method for CoinsList {
    type Response = Vec<CoinListEntry>;
    type Params = CoinsListParams;

    fn path(_params: &Self::Params) -> String {
        "coins/list".to_string()
    }
}
