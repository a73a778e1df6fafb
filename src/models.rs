use crate::period::Period;
use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One per-item row as delivered by the sales endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSalesRecord {
    #[serde(rename = "SKU", default, deserialize_with = "lenient_string")]
    pub sku: String,
    #[serde(rename = "sum", default, deserialize_with = "lenient_string")]
    pub total: String,
}

impl RawSalesRecord {
    pub fn new(sku: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            total: total.into(),
        }
    }
}

pub type SalesSnapshot = Vec<RawSalesRecord>;

/// Response envelope of the sales endpoint. `data` is kept loose so a wrong
/// shape degrades to an empty snapshot instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct SalesPayload {
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub sku: String,
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateKpis {
    pub total_value: i64,
    pub item_count: usize,
    pub average_value: i64,
    pub top_item: Option<RankedItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSlice {
    pub item: RankedItem,
    pub share: String,
}

/// State of one fetch cycle owned by a single view.
#[derive(Debug, Clone, Default)]
pub struct SalesView {
    pub loading: bool,
    pub failed: bool,
    pub snapshot: SalesSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardModel {
    pub period: Period,
    pub failed: bool,
    pub kpis: AggregateKpis,
    pub top_ten: Vec<RankedItem>,
    pub top_five: Vec<ShareSlice>,
    pub fetched_at: DateTime<Local>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    #[serde(default)]
    pub period: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accepts_numbers_and_missing_fields() {
        let records: Vec<RawSalesRecord> = serde_json::from_str(
            r#"[{"SKU": "100", "sum": "5000"}, {"SKU": 7, "sum": 42}, {"sum": null}]"#,
        )
        .unwrap();

        assert_eq!(records[0], RawSalesRecord::new("100", "5000"));
        assert_eq!(records[1], RawSalesRecord::new("7", "42"));
        assert_eq!(records[2], RawSalesRecord::new("", ""));
    }
}
