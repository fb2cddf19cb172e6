use serde::{Deserialize, Serialize};

/// One OHLCV price bar, serialized with the column names clients expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Calendar day in the exchange's local time, `YYYY-MM-DD`.
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: u64,
    /// Cash dividend paid inside this bar's interval, 0.0 if none.
    #[serde(rename = "Dividends")]
    pub dividends: f64,
    /// Split ratio effective inside this bar's interval, 0.0 if none.
    #[serde(rename = "Stock Splits")]
    pub stock_splits: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_bar_serializes_with_column_names() {
        let bar = PriceBar {
            date: "2024-05-01".to_string(),
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
            volume: 100,
            dividends: 0.0,
            stock_splits: 0.0,
        };
        let json = serde_json::to_value(&bar).expect("serialize");
        assert_eq!(json["Date"], "2024-05-01");
        assert_eq!(json["Volume"], 100);
        assert_eq!(json["Stock Splits"], 0.0);
        assert!(json.get("date").is_none());
    }
}
