use scraper::Html;
use serde::{Deserialize, Serialize};

/// A heuristic: parsed document in, non-empty normalized text out.
pub type Strategy = fn(&Html) -> Option<String>;

/// Extract article result.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedArticle {
    pub title: Option<String>,
    pub body_text: Option<String>,
}
