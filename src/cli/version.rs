//! Minimum toolchain check
//!
//! The rustc version that compiled the crate is recorded by the build script
//! in `CLY_RUSTC_VERSION`. Programs refuse to start when it is older than
//! [`MINIMUM_VERSION`].

use crate::error::ClyError;
use crate::types::ToolchainVersion;

/// Oldest supported toolchain
pub const MINIMUM_VERSION: ToolchainVersion = ToolchainVersion::new(1, 88);

/// Version of the toolchain that compiled this crate, if it was recorded
pub fn toolchain_version() -> Option<ToolchainVersion> {
    option_env!("CLY_RUSTC_VERSION").and_then(ToolchainVersion::parse)
}

/// Fails when the compiling toolchain is older than [`MINIMUM_VERSION`]
pub fn check_minimum_version() -> Result<(), ClyError> {
    check_version(toolchain_version(), MINIMUM_VERSION)
}

/// Compares a found version against a requirement
///
/// An unknown version passes.
pub fn check_version(
    found: Option<ToolchainVersion>,
    required: ToolchainVersion,
) -> Result<(), ClyError> {
    match found {
        Some(found) if found < required => Err(ClyError::UnsupportedVersion { found, required }),
        _ => Ok(()),
    }
}
