use anyhow::Context;
use chart::BarChart;
use chrono::{Local, NaiveDate};
use clap::Parser;
use config::{CURRENCIES, Config};
use data_fetcher::{fetch_coin_metrics, load_coin_directory};
use devpulse_coingecko::CoingeckoClient;
use devpulse_coingecko::coin::{COMMUNITY_DATA, DEVELOPER_DATA};
use devpulse_metrics::cache::{COIN_LIST_EXTENSION, COIN_LIST_PREFIX};
use devpulse_metrics::cleanup::remove_stale;
use devpulse_metrics::{CoinDirectory, CoinListCache, normalize_symbol};
use dotenv::dotenv;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
mod chart;
mod config;
mod data_fetcher;

const CHART_SUFFIX: &str = "_data.html";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Currency symbol to chart (e.g. btc, eth). Every listed currency when omitted
    #[arg(long)]
    symbol: Option<String>,

    /// Print the supported currencies and exit
    #[arg(long)]
    list: bool,

    /// Directory holding the daily coin list cache
    #[arg(long)]
    data_dir: Option<std::path::PathBuf>,

    /// Directory the chart pages are written to
    #[arg(long)]
    out_dir: Option<std::path::PathBuf>,

    /// Keep coin lists and charts from earlier days
    #[arg(long)]
    no_cleanup: bool,
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Deletes coin lists and chart pages left over from earlier days.
fn sweep_stale_files(config: &Config, today: NaiveDate) {
    let targets: [(&Path, &[&str]); 2] = [
        (config.data_dir.as_path(), &[COIN_LIST_PREFIX, COIN_LIST_EXTENSION]),
        (config.out_dir.as_path(), &[CHART_SUFFIX]),
    ];

    for (dir, patterns) in targets {
        match remove_stale(dir, patterns, today) {
            Ok(removed) if !removed.is_empty() => {
                info!(dir = %dir.display(), removed = removed.len(), "cleaned up stale files")
            }
            Ok(_) => {}
            Err(e) => warn!(dir = %dir.display(), error = %e, "stale file cleanup failed"),
        }
    }
}

async fn chart_currency(
    client: &CoingeckoClient,
    directory: &CoinDirectory,
    symbol: &str,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let Some(coin_id) = directory.resolve(symbol) else {
        warn!(symbol, "symbol not found in coin list, skipping");
        return Ok(());
    };
    info!(symbol, coin_id, "fetching coin data");

    let metrics = fetch_coin_metrics(client, coin_id).await;

    let charts = [
        (BarChart::developer(&metrics.name, &metrics.developer), DEVELOPER_DATA),
        (BarChart::community(&metrics.name, &metrics.community), COMMUNITY_DATA),
    ];

    for (chart, section) in charts {
        let path = out_dir.join(format!("{}_{section}.html", metrics.id));
        chart
            .write(&path)
            .with_context(|| format!("Failed to write chart {}", path.display()))?;
        println!("{}", path.display());
    }

    Ok(())
}

async fn run(config: Config, symbol: Option<String>, cleanup: bool) -> anyhow::Result<()> {
    let today = Local::now().date_naive();

    if cleanup {
        sweep_stale_files(&config, today);
    }

    let client = CoingeckoClient::with_base_url(&config.base_url, config.api_key.as_deref())
        .context("Failed to build CoinGecko client")?;
    let cache = CoinListCache::new(&config.data_dir);
    let directory = load_coin_directory(&client, &cache, today).await;
    if directory.is_empty() {
        warn!("coin list unavailable, no symbol can be resolved");
    } else {
        info!(day = %directory.day(), coins = directory.len(), "coin directory ready");
    }

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("Failed to create {}", config.out_dir.display()))?;

    let symbols: Vec<String> = match symbol {
        Some(symbol) => vec![normalize_symbol(&symbol)],
        None => CURRENCIES.iter().map(|s| s.to_string()).collect(),
    };

    for symbol in &symbols {
        if let Err(e) = chart_currency(&client, &directory, symbol, &config.out_dir).await {
            warn!(symbol, error = %e, "failed to chart currency");
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let args = Args::parse();

    if args.list {
        for currency in CURRENCIES {
            println!("{currency}");
        }
        return Ok(());
    }

    let config = Config::from_env().with_overrides(args.data_dir, args.out_dir);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    rt.block_on(run(config, args.symbol, !args.no_cleanup))
}
