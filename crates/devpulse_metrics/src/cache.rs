use chrono::NaiveDate;
use devpulse_shared_models::CoinListEntry;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

pub const COIN_LIST_PREFIX: &str = "List_of_all_coins_";
pub const COIN_LIST_EXTENSION: &str = ".csv";

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cache CSV could not be processed: {0}")]
    Csv(#[from] PolarsError),
    #[error("Cache CSV has no `{0}` column")]
    MissingColumn(&'static str),
}

/// Day-stamped CSV copy of the full coin list. A file is only ever looked up
/// by the requested day's name, so files from earlier days are never read.
#[derive(Debug, Clone)]
pub struct CoinListCache {
    dir: PathBuf,
}

impl CoinListCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file_name(day: NaiveDate) -> String {
        format!("{COIN_LIST_PREFIX}{}{COIN_LIST_EXTENSION}", day.format("%Y-%m-%d"))
    }

    pub fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.dir.join(Self::file_name(day))
    }

    /// Reads the list cached for `day`. `None` if there is no such file or it
    /// holds no coins.
    pub fn load(&self, day: NaiveDate) -> Result<Option<Vec<CoinListEntry>>, CacheError> {
        let path = self.path_for(day);
        if !path.is_file() {
            debug!(path = %path.display(), "no cached coin list");
            return Ok(None);
        }

        // every column stays a string, ids such as "0" must not become integers
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path))?
            .finish()?;

        let coins = frame_to_coins(&df)?;
        if coins.is_empty() {
            debug!("cached coin list is empty");
            return Ok(None);
        }

        Ok(Some(coins))
    }

    /// Writes `coins` as the list for `day` and returns the file path.
    pub fn store(&self, day: NaiveDate, coins: &[CoinListEntry]) -> Result<PathBuf, CacheError> {
        fs::create_dir_all(&self.dir)?;

        let mut df = coins_to_frame(coins)?;
        let path = self.path_for(day);
        let mut file = File::create(&path)?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;

        debug!(path = %path.display(), rows = coins.len(), "stored coin list");
        Ok(path)
    }
}

fn coins_to_frame(coins: &[CoinListEntry]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new(
            "id".into(),
            coins.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "symbol".into(),
            coins.iter().map(|c| c.symbol.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            "name".into(),
            coins.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        ),
    ])
}

fn string_column<'a>(
    df: &'a DataFrame,
    name: &'static str,
) -> Result<&'a StringChunked, CacheError> {
    let column = df
        .column(name)
        .map_err(|_| CacheError::MissingColumn(name))?;

    Ok(column.str()?)
}

fn frame_to_coins(df: &DataFrame) -> Result<Vec<CoinListEntry>, CacheError> {
    let ids = string_column(df, "id")?;
    let symbols = string_column(df, "symbol")?;
    let names = string_column(df, "name")?;

    let coins = ids
        .into_iter()
        .zip(symbols.into_iter())
        .zip(names.into_iter())
        .map(|((id, symbol), name)| {
            CoinListEntry::new(
                id.unwrap_or_default(),
                symbol.unwrap_or_default(),
                name.unwrap_or_default(),
            )
        })
        .collect();

    Ok(coins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn file_name_carries_iso_date() {
        assert_eq!(
            CoinListCache::file_name(day(7)),
            "List_of_all_coins_2024-05-07.csv"
        );
    }

    #[test]
    fn store_then_load_same_day() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CoinListCache::new(dir.path().join("data"));
        let coins = vec![
            CoinListEntry::new("bitcoin", "btc", "Bitcoin"),
            CoinListEntry::new("0", "zero", "Zero, Inc."),
            CoinListEntry::new("abc-1", "abc", "Abc \"One\""),
        ];

        let path = cache.store(day(7), &coins).unwrap();

        assert_eq!(path, dir.path().join("data/List_of_all_coins_2024-05-07.csv"));
        assert_eq!(cache.load(day(7)).unwrap(), Some(coins));
    }

    #[test]
    fn other_day_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CoinListCache::new(dir.path());
        cache
            .store(day(7), &[CoinListEntry::new("bitcoin", "btc", "Bitcoin")])
            .unwrap();

        assert_eq!(cache.load(day(8)).unwrap(), None);
    }

    #[test]
    fn header_only_file_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CoinListCache::new(dir.path());
        fs::write(cache.path_for(day(7)), "id,symbol,name\n").unwrap();

        assert_eq!(cache.load(day(7)).unwrap(), None);
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CoinListCache::new(dir.path());
        fs::write(cache.path_for(day(7)), "id,ticker\nbitcoin,btc\n").unwrap();

        assert!(matches!(
            cache.load(day(7)),
            Err(CacheError::MissingColumn("symbol"))
        ));
    }
}
