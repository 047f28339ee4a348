//! Runtime detection and package installation
//!
//! This module provides:
//! - Availability checks for Node.js and the package manager
//! - The [`PackageInstaller`] seam and its process-backed implementation

pub mod check;
pub mod install;

pub use check::{check_node, check_tool, RuntimeInfo};
pub use install::{CommandInstaller, PackageInstaller};
