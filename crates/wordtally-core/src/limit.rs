//! Number of ranked entries shown at once.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{TallyError, TallyResult};

/// A positive display limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayLimit(NonZeroUsize);

impl DisplayLimit {
    pub const DEFAULT: usize = 10;

    pub fn new(limit: usize) -> TallyResult<Self> {
        NonZeroUsize::new(limit)
            .map(Self)
            .ok_or(TallyError::NonPositiveLimit(0))
    }

    /// Parse user input such as `"25"`.
    pub fn parse(input: &str) -> TallyResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TallyError::EmptyInput);
        }
        let value: i64 = input
            .parse()
            .map_err(|_| TallyError::InvalidNumber(input.to_string()))?;
        if value < 1 {
            return Err(TallyError::NonPositiveLimit(value));
        }
        let value =
            usize::try_from(value).map_err(|_| TallyError::InvalidNumber(input.to_string()))?;
        Self::new(value)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for DisplayLimit {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(Self::DEFAULT - 1))
    }
}

impl fmt::Display for DisplayLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
