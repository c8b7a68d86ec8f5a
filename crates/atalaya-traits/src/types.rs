//! Common types used throughout the Atalaya pipeline.
//!
//! Upstream providers return loosely-typed JSON whose schema is not under
//! our control. [`Record`] confines that risk to one translation layer:
//! every lookup defaults on a missing or mistyped key instead of failing,
//! so partially-populated statements still produce a complete report.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A market symbol identifier, e.g. "AAPL" or "MSFT".
pub type Symbol = String;

/// An untyped per-period record from an upstream collaborator.
///
/// Wraps a JSON object such as one income-statement period or one price
/// quote. Numeric lookups default to `0.0` and string lookups to `""`,
/// which keeps the report shape complete even when upstream data is sparse.
///
/// # Example
///
/// ```
/// use atalaya_traits::Record;
/// use serde_json::json;
///
/// let rec = Record::from_value(json!({"netIncome": 100.0, "symbol": "AAPL"}));
/// assert_eq!(rec.num("netIncome"), 100.0);
/// assert_eq!(rec.num("totalAssets"), 0.0);
/// assert_eq!(rec.text("symbol"), "AAPL");
/// assert_eq!(rec.text("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Creates a record from a JSON value.
    ///
    /// Non-object values (arrays, scalars, null) yield an empty record,
    /// matching the degrade-to-empty policy at the collaborator boundary.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }

    /// Gets a numeric field, defaulting to `0.0` when the key is missing
    /// or the value is not a number.
    #[must_use]
    pub fn num(&self, key: &str) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// Gets a numeric field with an explicit default for a missing or
    /// non-numeric key.
    #[must_use]
    pub fn num_or(&self, key: &str, default: f64) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    /// Gets a string field, defaulting to `""` when the key is missing
    /// or the value is not a string.
    #[must_use]
    pub fn text(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Gets the raw JSON value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// The three statement series for one ticker, each ordered
/// most-recent-first as delivered by the upstream collaborator.
///
/// Series order is a documented precondition: the bundle does not re-sort,
/// and alignment trusts that index 0 is the latest period.
#[derive(Debug, Clone, Default)]
pub struct StatementBundle {
    /// Income statement periods, most recent first.
    pub income_statement: Vec<Record>,
    /// Balance sheet periods, most recent first.
    pub balance_sheet: Vec<Record>,
    /// Cash flow statement periods, most recent first.
    pub cash_flow_statement: Vec<Record>,
}

impl StatementBundle {
    /// The most recent income statement period, if any.
    #[must_use]
    pub fn latest_income(&self) -> Option<&Record> {
        self.income_statement.first()
    }

    /// The most recent balance sheet period, if any.
    #[must_use]
    pub fn latest_balance(&self) -> Option<&Record> {
        self.balance_sheet.first()
    }

    /// The most recent cash flow period, if any.
    #[must_use]
    pub fn latest_cash_flow(&self) -> Option<&Record> {
        self.cash_flow_statement.first()
    }
}

/// One news headline attached to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Headline text.
    pub title: String,
    /// Publishing outlet.
    pub source: String,
    /// Publication timestamp as reported by the collaborator.
    pub published_at: String,
    /// Link to the article.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_num_defaults_to_zero() {
        let rec = Record::from_value(json!({"revenue": 1000.0, "period": "FY"}));
        assert_eq!(rec.num("revenue"), 1000.0);
        assert_eq!(rec.num("netIncome"), 0.0);
        // Non-numeric value also defaults
        assert_eq!(rec.num("period"), 0.0);
    }

    #[test]
    fn test_text_defaults_to_empty() {
        let rec = Record::from_value(json!({"name": "Test Inc", "revenue": 5.0}));
        assert_eq!(rec.text("name"), "Test Inc");
        assert_eq!(rec.text("exchange"), "");
        assert_eq!(rec.text("revenue"), "");
    }

    #[test]
    fn test_from_non_object_is_empty() {
        assert!(Record::from_value(json!([1, 2, 3])).is_empty());
        assert!(Record::from_value(json!(null)).is_empty());
        assert!(Record::from_value(json!(42)).is_empty());
    }

    #[test]
    fn test_set_and_len() {
        let mut rec = Record::new();
        rec.set("marketCap", 1_000_000.0);
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.num("marketCap"), 1_000_000.0);
    }

    #[test]
    fn test_record_roundtrips_as_transparent_json() {
        let rec = Record::from_value(json!({"a": 1.0}));
        let text = serde_json::to_string(&rec).unwrap();
        assert_eq!(text, r#"{"a":1.0}"#);
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_bundle_latest_accessors() {
        let bundle = StatementBundle {
            income_statement: vec![Record::from_value(json!({"revenue": 2.0}))],
            balance_sheet: vec![],
            cash_flow_statement: vec![],
        };
        assert_eq!(bundle.latest_income().unwrap().num("revenue"), 2.0);
        assert!(bundle.latest_balance().is_none());
        assert!(bundle.latest_cash_flow().is_none());
    }

    #[test]
    fn test_news_item_wire_names() {
        let item = NewsItem {
            title: "T".into(),
            source: "Reuters".into(),
            published_at: "2023-01-01T12:00:00Z".into(),
            url: "http://news.example/1".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("published_at").is_none());
    }
}
