use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE_NUMBERS: &str = "1,2,3,4,5,6,7,8";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/menu?qr=true&table=";

/// Настройки генератора QR-кодов столов.
///
/// Both fields are stored exactly as typed; nothing is validated here.
/// A malformed base URL simply yields malformed ordering URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableQrConfig {
    /// Comma-separated table numbers, e.g. `"1, 2, 3"`
    pub table_numbers_raw: String,

    /// Prefix every table id is appended to
    pub base_url: String,
}

impl Default for TableQrConfig {
    fn default() -> Self {
        Self {
            table_numbers_raw: DEFAULT_TABLE_NUMBERS.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl TableQrConfig {
    pub fn new(table_numbers_raw: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            table_numbers_raw: table_numbers_raw.into(),
            base_url: base_url.into(),
        }
    }

    /// Table ids in input order, see [`parse_table_numbers`].
    pub fn table_ids(&self) -> Vec<String> {
        parse_table_numbers(&self.table_numbers_raw)
    }

    /// Link a diner lands on after scanning the table's QR code.
    pub fn ordering_url(&self, table_id: &str) -> String {
        format!("{}{}", self.base_url, table_id)
    }
}

/// Split on commas, trim every token and drop the empty ones.
///
/// Order is preserved and duplicates are kept.
pub fn parse_table_numbers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_numbers() {
        assert_eq!(parse_table_numbers("1, 2,,3"), vec!["1", "2", "3"]);
        assert_eq!(parse_table_numbers("  A1 ,B2  "), vec!["A1", "B2"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        assert_eq!(parse_table_numbers("3,1,3"), vec!["3", "1", "3"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_table_numbers("").is_empty());
        assert!(parse_table_numbers(" , ,, ").is_empty());
    }

    #[test]
    fn test_ordering_url() {
        let config = TableQrConfig::new("5", "http://x/?t=");
        assert_eq!(config.ordering_url("5"), "http://x/?t=5");
    }

    #[test]
    fn test_ordering_url_is_not_encoded() {
        let config = TableQrConfig::new("", "");
        assert_eq!(config.ordering_url("a b&c"), "a b&c");
    }

    #[test]
    fn test_defaults() {
        let config = TableQrConfig::default();
        assert_eq!(config.table_ids().len(), 8);
        assert_eq!(
            config.ordering_url("4"),
            "http://localhost:3000/menu?qr=true&table=4"
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: TableQrConfig =
            serde_json::from_str(r#"{"table_numbers_raw":"7,9"}"#).unwrap();
        assert_eq!(config.table_ids(), vec!["7", "9"]);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
