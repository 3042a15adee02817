use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative maturity band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Initial,
    Basic,
    Intermediate,
    Advanced,
}

impl MaturityLevel {
    pub fn label(self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Basic => "Basic",
            MaturityLevel::Intermediate => "Intermediate",
            MaturityLevel::Advanced => "Advanced",
        }
    }

    /// Presentation color the dashboard uses for badges and gauges.
    pub fn style_hint(self) -> &'static str {
        match self {
            MaturityLevel::Initial => "#dc2626",
            MaturityLevel::Basic => "#f59e0b",
            MaturityLevel::Intermediate => "#2563eb",
            MaturityLevel::Advanced => "#16a34a",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Level plus its style hint, as rendered next to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityRating {
    pub level: MaturityLevel,
    pub style_hint: &'static str,
}

pub fn level_of(score: u8) -> MaturityLevel {
    if score >= 80 {
        MaturityLevel::Advanced
    } else if score >= 60 {
        MaturityLevel::Intermediate
    } else if score >= 40 {
        MaturityLevel::Basic
    } else {
        MaturityLevel::Initial
    }
}

pub fn rate(score: u8) -> MaturityRating {
    let level = level_of(score);
    MaturityRating {
        level,
        style_hint: level.style_hint(),
    }
}
