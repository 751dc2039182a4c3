use serde::{Deserialize, Serialize};
use std::fmt;

pub const MISSING_PURPOSE: &str = "No purpose specified.";
pub const MISSING_RATING: &str = "Unknown";
pub const MISSING_NOTES: &str = "No notes available.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub ingredient_name: String,
}

/// The model's judgment on one ingredient.
///
/// Every key is optional: the relay does not validate the model's output,
/// so the accessors fall back to placeholder text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub safety_rating: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AnalysisResult {
    /// Reads the three known keys out of an arbitrary JSON value. Keys that
    /// are absent or not strings are treated as missing.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |key: &str| value.get(key).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            purpose: field("purpose"),
            safety_rating: field("safety_rating"),
            notes: field("notes"),
        }
    }

    pub fn purpose(&self) -> &str {
        self.purpose.as_deref().unwrap_or(MISSING_PURPOSE)
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or(MISSING_NOTES)
    }

    pub fn rating(&self) -> SafetyRating {
        SafetyRating::parse(self.safety_rating.as_deref().unwrap_or(MISSING_RATING))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyRating {
    Safe,
    Caution,
    Avoid,
    /// Anything the model returned outside the three expected literals.
    Other(String),
}

impl SafetyRating {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Safe" => Self::Safe,
            "Caution" => Self::Caution,
            "Avoid" => Self::Avoid,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn badge(&self) -> BadgeStyle {
        match self {
            Self::Safe => BadgeStyle::Positive,
            Self::Caution => BadgeStyle::Warning,
            Self::Avoid => BadgeStyle::Negative,
            Self::Other(_) => BadgeStyle::Neutral,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Safe => "Safe",
            Self::Caution => "Caution",
            Self::Avoid => "Avoid",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for SafetyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Positive,
    Warning,
    Negative,
    Neutral,
}
