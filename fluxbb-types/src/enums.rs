use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    #[default]
    Sqlite,
    Mysql,
    Pgsql,
}

impl DatabaseDriver {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseDriver::Sqlite => "sqlite",
            DatabaseDriver::Mysql => "mysql",
            DatabaseDriver::Pgsql => "pgsql",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sqlite" => Some(DatabaseDriver::Sqlite),
            "mysql" => Some(DatabaseDriver::Mysql),
            "pgsql" | "postgres" | "postgresql" => Some(DatabaseDriver::Pgsql),
            _ => None,
        }
    }
}

impl fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single board option row.
///
/// Integers are persisted as their decimal text, `Null` as SQL NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Text(String),
    Null,
}

impl OptionValue {
    pub fn text(s: impl Into<String>) -> Self {
        OptionValue::Text(s.into())
    }

    /// The value as it is stored in the `conf_value` column
    pub fn to_db_value(&self) -> Option<String> {
        match self {
            OptionValue::Int(n) => Some(n.to_string()),
            OptionValue::Text(s) => Some(s.clone()),
            OptionValue::Null => None,
        }
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Int(i64::from(n))
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Int(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}
