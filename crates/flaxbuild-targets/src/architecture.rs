//! CPU architectures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};

/// A CPU architecture a platform can be built for.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetArchitecture {
    #[serde(rename = "x64")]
    X64,
    #[serde(rename = "x86")]
    X86,
    ARM,
    ARM64,
}

impl TargetArchitecture {
    /// Every architecture, in declaration order.
    pub const ALL: [TargetArchitecture; 4] = [
        TargetArchitecture::X64,
        TargetArchitecture::X86,
        TargetArchitecture::ARM,
        TargetArchitecture::ARM64,
    ];

    /// Canonical display name (also the staging folder name).
    pub fn name(self) -> &'static str {
        match self {
            TargetArchitecture::X64 => "x64",
            TargetArchitecture::X86 => "x86",
            TargetArchitecture::ARM => "ARM",
            TargetArchitecture::ARM64 => "ARM64",
        }
    }

    /// Pointer width in bits.
    pub fn bits(self) -> u32 {
        match self {
            TargetArchitecture::X64 | TargetArchitecture::ARM64 => 64,
            TargetArchitecture::X86 | TargetArchitecture::ARM => 32,
        }
    }
}

impl fmt::Display for TargetArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetArchitecture {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        TargetArchitecture::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TargetError::UnknownArchitecture {
                name: s.to_string(),
                expected: TargetArchitecture::ALL
                    .iter()
                    .map(|a| a.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_staging_folders() {
        let names: Vec<_> = TargetArchitecture::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["x64", "x86", "ARM", "ARM64"]);
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!("X64".parse::<TargetArchitecture>().unwrap(), TargetArchitecture::X64);
        assert_eq!("arm64".parse::<TargetArchitecture>().unwrap(), TargetArchitecture::ARM64);
        assert!("mips".parse::<TargetArchitecture>().is_err());
    }

    #[test]
    fn pointer_width() {
        assert_eq!(TargetArchitecture::X64.bits(), 64);
        assert_eq!(TargetArchitecture::ARM.bits(), 32);
    }

    #[test]
    fn serde_uses_lowercase_x86_names() {
        let json = serde_json::to_string(&TargetArchitecture::X86).unwrap();
        assert_eq!(json, "\"x86\"");
        let back: TargetArchitecture = serde_json::from_str("\"ARM64\"").unwrap();
        assert_eq!(back, TargetArchitecture::ARM64);
    }
}
