use serde::{Deserialize, Serialize};

/// Patient age category. The canonical representation throughout the
/// pipeline; numeric ages are converted at the API boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Child,
    Adult,
    Elderly,
}

impl AgeGroup {
    /// Convert a numeric age (years) to a category.
    /// Under 18 is a child, 65 and over is elderly.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=17 => AgeGroup::Child,
            18..=64 => AgeGroup::Adult,
            _ => AgeGroup::Elderly,
        }
    }

    /// Dose-column category: the dose table carries child/adult columns
    /// only, so elderly patients resolve to the adult column.
    pub fn dose_column(self) -> AgeGroup {
        match self {
            AgeGroup::Elderly => AgeGroup::Adult,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Elderly => "elderly",
        }
    }
}
