use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{PresscutError, Result};
use crate::types::ExtractionOutcome;

/// Timestamp layout used by the media table.
pub const ROW_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the media tracking table.
///
/// Field names follow the table schema, hence snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub url: String,
    pub content: String,
    pub domain: String,
    pub title: String,
    #[serde(with = "row_datetime")]
    pub publish_date: NaiveDateTime,
    #[serde(with = "row_datetime")]
    pub updated_at: NaiveDateTime,
    pub matched_spokespeople: String,
    pub matched_portcos: String,
    pub managed_by_fund: bool,
}

impl MediaRecord {
    /// Pre-fill a record from an extraction; publish date defaults to the day of `now`.
    pub fn draft(url: &str, outcome: &ExtractionOutcome, now: NaiveDateTime) -> Self {
        Self {
            url: url.to_string(),
            content: outcome.body_text.clone().unwrap_or_default(),
            domain: outcome.domain.clone(),
            title: outcome.title.clone().unwrap_or_default(),
            publish_date: now.date().and_time(NaiveTime::MIN),
            updated_at: now,
            matched_spokespeople: String::new(),
            matched_portcos: String::new(),
            managed_by_fund: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_publish_date(mut self, date: NaiveDate) -> Self {
        self.publish_date = date.and_time(NaiveTime::MIN);
        self
    }

    pub fn with_spokesperson(mut self, spokesperson: impl Into<String>) -> Self {
        self.matched_spokespeople = spokesperson.into();
        self
    }

    pub fn with_portfolio_company(mut self, company: impl Into<String>) -> Self {
        self.matched_portcos = company.into();
        self
    }

    pub fn with_managed_by_fund(mut self, managed: bool) -> Self {
        self.managed_by_fund = managed;
        self
    }

    /// A record is only saved with non-blank content.
    pub fn check(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(PresscutError::MissingContent);
        }
        Ok(())
    }
}

mod row_datetime {
    use super::ROW_DATETIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&value.format(ROW_DATETIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, ROW_DATETIME_FORMAT).map_err(D::Error::custom)
    }
}

/// Answer of a storage backend to one insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertResult {
    pub success: bool,
    pub message: String,
}

impl InsertResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: "ok".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<InsertResult> for (bool, String) {
    fn from(r: InsertResult) -> Self {
        (r.success, r.message)
    }
}
