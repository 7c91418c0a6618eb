use chrono::NaiveDate;
use devpulse_metrics::{CoinDirectory, CoinListCache, flatten_section, normalize_symbol};
use devpulse_shared_models::CoinListEntry;
use serde_json::json;

#[test]
fn cached_directory_resolves_and_detail_flattens() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let cache = CoinListCache::new(dir.path());

    cache
        .store(
            today,
            &[
                CoinListEntry::new("ethereum", "eth", "Ethereum"),
                CoinListEntry::new("ethereum-wormhole", "eth", "Ethereum (Wormhole)"),
                CoinListEntry::new("bitcoin", "btc", "Bitcoin"),
            ],
        )
        .expect("Failed to store coin list");

    let coins = cache
        .load(today)
        .expect("Failed to load coin list")
        .expect("Coin list should be cached for today");
    let directory = CoinDirectory::new(today, coins);

    let coin_id = directory.resolve(&normalize_symbol("ETH"));
    assert_eq!(coin_id, Some("ethereum"));

    let detail = json!({
        "id": "ethereum",
        "developer_data": {
            "forks": 19000,
            "stars": 43000,
            "total_issues": 6000,
            "closed_issues": 5500,
            "code_additions_deletions_4_weeks": {"additions": 1200, "deletions": -800},
            "last_4_weeks_commit_activity_series": []
        },
        "community_data": {
            "facebook_likes": null,
            "twitter_followers": 3000000,
            "reddit_subscribers": 1400000,
            "telegram_channel_user_count": null
        }
    });

    let developer = flatten_section(detail.get("developer_data"), "developer_data");
    let community = flatten_section(detail.get("community_data"), "community_data");

    assert_eq!(
        developer.metrics().collect::<Vec<_>>(),
        vec!["forks", "stars", "total_issues", "closed_issues"]
    );
    assert_eq!(
        community.metrics().collect::<Vec<_>>(),
        vec!["twitter_followers", "reddit_subscribers"]
    );
}
