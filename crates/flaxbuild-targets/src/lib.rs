//! Target enumerations for the flaxbuild tool.
//!
//! The three lists are closed and fixed when the tool is compiled:
//! - **Platforms:** operating systems and consoles the engine ships on
//! - **Architectures:** CPU instruction sets
//! - **Configurations:** build flavors

pub mod architecture;
pub mod configuration;
pub mod error;
pub mod platform;

pub use architecture::TargetArchitecture;
pub use configuration::TargetConfiguration;
pub use error::{Result, TargetError};
pub use platform::TargetPlatform;
