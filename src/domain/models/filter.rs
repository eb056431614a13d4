use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const SCORE_MIN: i64 = 0;
pub const SCORE_MAX: i64 = 100;

/// What the filter panel submits: a set of countries and an inclusive score
/// range. An empty country set matches everything.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub locations: BTreeSet<String>,
    pub score: (i64, i64),
}

impl FilterSpec {
    /// Enforces `0 <= min <= max <= 100` at construction.
    pub fn new<I>(locations: I, min: i64, max: i64) -> Result<Self, AppError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if min < SCORE_MIN || max > SCORE_MAX || min > max {
            return Err(AppError::Validation(format!(
                "score range [{min}, {max}] must satisfy 0 <= min <= max <= 100"
            )));
        }
        Ok(Self {
            locations: locations.into_iter().map(Into::into).collect(),
            score: (min, max),
        })
    }

    /// Matches every lead.
    pub fn match_all() -> Self {
        Self {
            locations: BTreeSet::new(),
            score: (SCORE_MIN, SCORE_MAX),
        }
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::match_all()
    }
}
