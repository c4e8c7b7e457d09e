//! # regress - CMake Regression Cycle Driver
//!
//! regress (binary: `rgr`) automates the regression loop for CMake projects:
//! wipe the build directory, configure, compile, and run the test suite with
//! one job per logical core, once per configured build type.
//!
//! ## Features
//!
//! - **Zero Configuration**: the defaults drive a standard CMake project with
//!   `Debug` and `Release` passes; `regress.toml` is optional
//! - **Clean Room Builds**: the build directory is wiped before every
//!   configure, so no stale cache leaks between flavors
//! - **Parallel Tests**: `ctest` gets one job per detected logical core
//! - **Fail Fast**: a configure or build failure exits with the tool's own
//!   exit code; a failing test suite is reported, not fatal
//!
//! ## Quick Start
//!
//! ```bash
//! # Debug + Release cycle from the project root
//! rgr
//!
//! # Pass -V through to ctest
//! rgr --verbose
//! ```
//!
//! ## Module Organization
//!
//! - [`cycle`] - The clean-configure-build-test driver
//! - [`config`] - Configuration parsing (`regress.toml`)
//! - [`exec`] - Child process helpers
//! - [`workdir`] - Scoped working-directory guard
//! - [`ui`] - Terminal UI utilities

/// Configuration file parsing (`regress.toml`).
pub mod config;

/// The clean-configure-build-test cycle driver.
pub mod cycle;

/// Child process helpers.
pub mod exec;

/// Terminal UI utilities (summary table).
pub mod ui;

/// Scoped working-directory guard.
pub mod workdir;
