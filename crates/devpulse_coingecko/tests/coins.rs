use devpulse_coingecko::CoingeckoClient;
use devpulse_coingecko::coin::{Coin, CoinParams};
use devpulse_coingecko::coins_list::{CoinsList, CoinsListParams};
use tokio::test;

fn client() -> CoingeckoClient {
    CoingeckoClient::new(std::env::var("COINGECKO_API_KEY").ok().as_deref())
        .expect("Failed to build CoinGecko client")
}

#[test]
#[ignore = "hits the live CoinGecko API"]
pub async fn fetch_coins_list() {
    let coins = client()
        .call::<CoinsList>(CoinsListParams::default())
        .await
        .expect("Failed to fetch coins list");

    assert!(coins.iter().any(|coin| coin.id == "bitcoin" && coin.symbol == "btc"));
}

#[test]
#[ignore = "hits the live CoinGecko API"]
pub async fn fetch_coin_detail() {
    let detail = client()
        .call::<Coin>(CoinParams::builder().id("bitcoin").build())
        .await
        .expect("Failed to fetch coin detail");

    assert_eq!(detail.id, "bitcoin");
    assert!(detail.developer_data().is_some_and(|section| section.is_object()));
    assert!(detail.community_data().is_some_and(|section| section.is_object()));
}

#[test]
pub async fn unreachable_host_is_an_http_error() {
    let client = CoingeckoClient::with_base_url("http://127.0.0.1:9", None)
        .expect("Failed to build client");

    let result = client.call::<CoinsList>(CoinsListParams::default()).await;

    assert!(matches!(result, Err(devpulse_coingecko::CoingeckoError::Http(_))));
}
