//! Tournament listing records.
//!
//! Shapes mirror what the listing scraper emits: the raw date text stays as
//! scraped, and [`Tournament::date_range`] resolves it on demand through
//! the schedule parser.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schedule::{parse_date_range, DateParseError, DateRange};

/// Base site URL used to absolutize relative listing links.
pub const ATP_BASE_URL: &str = "https://www.atptour.com";

/// Tour-level category of a tournament.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TournamentCategory {
    #[serde(rename = "Grand Slam")]
    GrandSlam,
    #[serde(rename = "Masters 1000")]
    Masters1000,
    #[serde(rename = "ATP 500")]
    Atp500,
    #[serde(rename = "ATP 250")]
    Atp250,
    #[default]
    Other,
}

impl TournamentCategory {
    /// Classify a tournament from its badge image path.
    ///
    /// Listing pages mark the category only with a badge image; the path is
    /// the sole stable signal. Unknown badges classify as [`Other`].
    ///
    /// [`Other`]: TournamentCategory::Other
    pub fn from_badge_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        if lower.contains("grandslam") {
            TournamentCategory::GrandSlam
        } else if lower.contains("masters-1000") {
            TournamentCategory::Masters1000
        } else if lower.contains("500") {
            TournamentCategory::Atp500
        } else if lower.contains("250") {
            TournamentCategory::Atp250
        } else {
            TournamentCategory::Other
        }
    }
}

impl fmt::Display for TournamentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TournamentCategory::GrandSlam => "Grand Slam",
            TournamentCategory::Masters1000 => "Masters 1000",
            TournamentCategory::Atp500 => "ATP 500",
            TournamentCategory::Atp250 => "ATP 250",
            TournamentCategory::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Title holder as listed on the tournament page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TournamentWinner {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One tournament as scraped from a listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Tournament {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub year: i32,
    /// Raw date text as listed, e.g. "31 March - 6 April, 2025".
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub surface: String,
    #[serde(default)]
    pub category: TournamentCategory,
    #[serde(default)]
    pub category_img: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<TournamentWinner>,
    #[serde(default)]
    pub detail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Resolve the raw listing date text into a start/end date pair.
    pub fn date_range(&self) -> Result<DateRange, DateParseError> {
        parse_date_range(&self.date)
    }
}

/// Prefix site-relative listing links with the tour base URL.
pub fn absolutize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}{}", ATP_BASE_URL, url)
    }
}
