use serde::{Deserialize, Serialize};

/// One row of the full coin list, as served by `coins/list` and as stored in
/// the daily CSV cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinListEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

impl CoinListEntry {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub metric: String,
    pub value: f64,
}

/// Flat (metric, value) table. Rows keep the order they were pushed in, which
/// is also the bar order of the rendered chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    rows: Vec<MetricRow>,
}

impl MetricTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, metric: impl Into<String>, value: f64) {
        self.rows.push(MetricRow {
            metric: metric.into(),
            value,
        });
    }

    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the first row named `metric`.
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| row.value)
    }

    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.metric.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keeps_push_order() {
        let mut table = MetricTable::new();
        table.push("stars", 340.0);
        table.push("forks", 120.0);

        assert_eq!(table.metrics().collect::<Vec<_>>(), vec!["stars", "forks"]);
        assert_eq!(table.values().collect::<Vec<_>>(), vec![340.0, 120.0]);
        assert_eq!(table.get("forks"), Some(120.0));
        assert_eq!(table.get("watchers"), None);
    }
}
