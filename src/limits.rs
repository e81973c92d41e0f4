use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Limits on incoming data
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Limits {
    /// Max buffered body size, in bytes
    pub body_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            body_size: Self::DEFAULT_BODY_SIZE,
        }
    }
}

impl Limits {
    /// Max number of body bytes, defaults to 100KB.
    pub const DEFAULT_BODY_SIZE: usize = 100 * 1024;

    /// Max body size
    #[must_use]
    pub fn body_size(mut self, max: usize) -> Self {
        self.body_size = max;
        self
    }

    /// Check body size
    #[must_use]
    pub fn checked_body_size(&self, rhs: usize) -> Option<usize> {
        (rhs > self.body_size).then_some(self.body_size)
    }
}

impl FromStr for Limits {
    type Err = Error;

    /// Parses a human-readable size such as `100kb`, `15mb` or `1.5gb`.
    /// Bare numbers are bytes, units are 1024-based and case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let unit_at = lower
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(lower.len());
        let (number, unit) = lower.split_at(unit_at);

        let scale: usize = match unit.trim_start() {
            "" | "b" => 1,
            "kb" => 1024,
            "mb" => 1024 * 1024,
            "gb" => 1024 * 1024 * 1024,
            _ => return Err(Error::InvalidSizeLimit(s.to_owned())),
        };

        let value = number
            .parse::<f64>()
            .map_err(|_| Error::InvalidSizeLimit(s.to_owned()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidSizeLimit(s.to_owned()));
        }

        Ok(Self::default().body_size((value * scale as f64) as usize))
    }
}
