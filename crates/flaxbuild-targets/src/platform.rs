//! Target platforms the build tool knows about.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};

/// An operating system / console target.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetPlatform {
    Windows,
    /// Universal Windows Platform.
    UWP,
    XboxOne,
    Linux,
    PS4,
    /// Xbox Series X|S.
    XboxScarlett,
    Android,
}

impl TargetPlatform {
    /// Every platform, in declaration order.
    pub const ALL: [TargetPlatform; 7] = [
        TargetPlatform::Windows,
        TargetPlatform::UWP,
        TargetPlatform::XboxOne,
        TargetPlatform::Linux,
        TargetPlatform::PS4,
        TargetPlatform::XboxScarlett,
        TargetPlatform::Android,
    ];

    /// Canonical display name (also the staging folder name).
    pub fn name(self) -> &'static str {
        match self {
            TargetPlatform::Windows => "Windows",
            TargetPlatform::UWP => "UWP",
            TargetPlatform::XboxOne => "XboxOne",
            TargetPlatform::Linux => "Linux",
            TargetPlatform::PS4 => "PS4",
            TargetPlatform::XboxScarlett => "XboxScarlett",
            TargetPlatform::Android => "Android",
        }
    }

    /// The platform the tool itself is running on, if it is one of the
    /// recognized targets.
    pub fn host() -> Option<TargetPlatform> {
        if cfg!(target_os = "windows") {
            Some(TargetPlatform::Windows)
        } else if cfg!(target_os = "android") {
            Some(TargetPlatform::Android)
        } else if cfg!(target_os = "linux") {
            Some(TargetPlatform::Linux)
        } else {
            None
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetPlatform {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        TargetPlatform::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TargetError::UnknownPlatform {
                name: s.to_string(),
                expected: TargetPlatform::ALL
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
