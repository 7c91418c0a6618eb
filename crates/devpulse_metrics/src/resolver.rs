use chrono::NaiveDate;
use devpulse_shared_models::CoinListEntry;
use tracing::{debug, warn};

/// Lower-cases and trims a user supplied ticker so it matches the API's
/// symbol convention.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_lowercase()
}

/// Maps a ticker symbol to the API coin id.
///
/// Symbols are compared case-sensitively, so callers pass a normalized symbol.
/// When several coins share the symbol, the first one whose id has no hyphen
/// wins, then the first one whose name has no hyphen, then the first match.
pub fn resolve<'a>(symbol: &str, coins: &'a [CoinListEntry]) -> Option<&'a str> {
    let matches: Vec<&'a CoinListEntry> = coins
        .iter()
        .filter(|coin| coin.symbol == symbol)
        .collect();

    match matches.as_slice() {
        [] => {
            warn!(symbol, "no coin matches symbol");
            None
        }
        &[only] => Some(only.id.as_str()),
        &[first, ..] => {
            let chosen = matches
                .iter()
                .copied()
                .find(|coin| !coin.id.contains('-'))
                .or_else(|| matches.iter().copied().find(|coin| !coin.name.contains('-')))
                .unwrap_or(first);

            debug!(symbol, candidates = matches.len(), id = %chosen.id, "disambiguated symbol");
            Some(chosen.id.as_str())
        }
    }
}

/// The coin list for one calendar day. Built once at startup and passed to
/// whoever needs to resolve symbols.
#[derive(Debug, Clone)]
pub struct CoinDirectory {
    day: NaiveDate,
    coins: Vec<CoinListEntry>,
}

impl CoinDirectory {
    pub fn new(day: NaiveDate, coins: Vec<CoinListEntry>) -> Self {
        Self { day, coins }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn resolve(&self, symbol: &str) -> Option<&str> {
        resolve(symbol, &self.coins)
    }
}
