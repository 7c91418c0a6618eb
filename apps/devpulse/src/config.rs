use devpulse_coingecko::BASE_URL;
use std::env;
use std::path::PathBuf;

/// Currencies charted when no symbol is given on the command line.
pub const CURRENCIES: &[&str] = &[
    "btc", "eth", "ada", "sol", "dot", "xrp", "doge", "ltc", "link", "xlm", "atom", "algo", "xmr",
    "etc", "near",
];

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUT_DIR: &str = "charts";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from a variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            api_key: var("COINGECKO_API_KEY"),
            base_url: var("COINGECKO_BASE_URL").unwrap_or_else(|| BASE_URL.to_string()),
            data_dir: var("DEVPULSE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            out_dir: var("DEVPULSE_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
        }
    }

    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, out_dir: Option<PathBuf>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(out_dir) = out_dir {
            self.out_dir = out_dir;
        }
        self
    }
}
