use chrono::NaiveDate;
use devpulse_coingecko::CoingeckoClient;
use devpulse_coingecko::coin::{COMMUNITY_DATA, Coin, CoinParams, DEVELOPER_DATA};
use devpulse_coingecko::coins_list::{CoinsList, CoinsListParams};
use devpulse_metrics::{CoinDirectory, CoinListCache, flatten_section};
use devpulse_shared_models::MetricTable;
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct CoinMetrics {
    pub id: String,
    pub name: String,
    pub developer: MetricTable,
    pub community: MetricTable,
}

/// Loads today's coin list, from the cache when present, otherwise from the
/// API (and then caches it). A failed fetch leaves the directory empty.
pub async fn load_coin_directory(
    client: &CoingeckoClient,
    cache: &CoinListCache,
    today: NaiveDate,
) -> CoinDirectory {
    match cache.load(today) {
        Ok(Some(coins)) => {
            info!(coins = coins.len(), %today, "using cached coin list");
            return CoinDirectory::new(today, coins);
        }
        Ok(None) => info!(%today, "no coin list cached for today, fetching"),
        Err(e) => warn!(error = %e, "cached coin list is unreadable, fetching"),
    }

    let coins = match client.call::<CoinsList>(CoinsListParams::default()).await {
        Ok(coins) => coins,
        Err(e) => {
            error!(error = %e, "failed to fetch coin list");
            Vec::new()
        }
    };

    if coins.is_empty() {
        warn!("coin list is empty, nothing cached");
    } else {
        match cache.store(today, &coins) {
            Ok(path) => info!(coins = coins.len(), path = %path.display(), "cached coin list"),
            Err(e) => warn!(error = %e, "failed to cache coin list"),
        }
    }

    CoinDirectory::new(today, coins)
}

/// Fetches the coin detail and flattens its developer and community
/// sections. A failed fetch yields empty tables.
pub async fn fetch_coin_metrics(client: &CoingeckoClient, coin_id: &str) -> CoinMetrics {
    let params = CoinParams::builder().id(coin_id).build();

    match client.call::<Coin>(params).await {
        Ok(detail) => CoinMetrics {
            developer: flatten_section(detail.developer_data(), DEVELOPER_DATA),
            community: flatten_section(detail.community_data(), COMMUNITY_DATA),
            id: detail.id,
            name: detail.name,
        },
        Err(e) => {
            error!(coin_id, error = %e, "failed to fetch coin detail");
            CoinMetrics {
                id: coin_id.to_string(),
                name: coin_id.to_string(),
                developer: MetricTable::new(),
                community: MetricTable::new(),
            }
        }
    }
}
