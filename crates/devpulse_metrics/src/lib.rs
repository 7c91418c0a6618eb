pub mod cache;
pub mod cleanup;
pub mod flatten;
pub mod resolver;

pub use cache::{CacheError, CoinListCache};
pub use flatten::{flatten, flatten_section};
pub use resolver::{CoinDirectory, normalize_symbol, resolve};
