use serde::{Deserialize, Serialize};

/// What an extraction produced for one URL.
///
/// `domain` is always filled in from the URL alone. Absent `title` or
/// `body_text` means the page could not be fetched or had nothing usable;
/// callers should fall back to manual entry, not treat it as an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionOutcome {
    pub title: Option<String>,
    pub body_text: Option<String>,
    pub domain: String,
}

impl ExtractionOutcome {
    /// Outcome with only the domain known.
    pub fn empty(domain: impl Into<String>) -> Self {
        Self {
            title: None,
            body_text: None,
            domain: domain.into(),
        }
    }

    /// True when the user has to supply title or body by hand.
    pub fn needs_manual_entry(&self) -> bool {
        self.title.is_none() || self.body_text.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    /// Non-fatal message for the user; `ok` stays true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            notice: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
            notice: None,
        }
    }
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}
