//! Argument construction for the three external steps.
//!
//! Kept apart from execution so the exact argument layout is testable
//! without spawning anything.

use crate::config::RegressConfig;

/// Arguments for the configure step:
/// `-S <source> -B <build> [-DBUILD_TESTING=ON] [-DCMAKE_BUILD_TYPE=<flavor>]`.
pub fn configure_args(config: &RegressConfig, build_type: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "-S".to_string(),
        config.source_dir.clone(),
        "-B".to_string(),
        config.build_dir.clone(),
    ];
    if config.testing {
        args.push("-DBUILD_TESTING=ON".to_string());
    }
    if let Some(flavor) = build_type {
        args.push(format!("-DCMAKE_BUILD_TYPE={flavor}"));
    }
    args.extend(config.configure_args.iter().cloned());
    args
}

/// Arguments for the build step: `--build <build>`.
pub fn build_args(config: &RegressConfig) -> Vec<String> {
    vec!["--build".to_string(), config.build_dir.clone()]
}

/// Arguments for the test step. `jobs` is the detected logical core count;
/// `-V` is appended only when verbose output was requested.
pub fn test_args(jobs: usize, verbose: bool) -> Vec<String> {
    let mut args = vec!["--parallel".to_string(), jobs.to_string()];
    if verbose {
        args.push("-V".to_string());
    }
    args
}
