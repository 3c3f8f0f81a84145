//! Build configurations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};

/// A build flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetConfiguration {
    /// No optimizations, full debug info.
    Debug,
    /// Optimized with debug info and development tooling enabled.
    Development,
    /// Fully optimized shipping build.
    Release,
}

impl TargetConfiguration {
    /// Every configuration, in declaration order.
    pub const ALL: [TargetConfiguration; 3] = [
        TargetConfiguration::Debug,
        TargetConfiguration::Development,
        TargetConfiguration::Release,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TargetConfiguration::Debug => "Debug",
            TargetConfiguration::Development => "Development",
            TargetConfiguration::Release => "Release",
        }
    }
}

impl fmt::Display for TargetConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetConfiguration {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        TargetConfiguration::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TargetError::UnknownConfiguration {
                name: s.to_string(),
                expected: TargetConfiguration::ALL
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
