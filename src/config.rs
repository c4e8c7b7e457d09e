//! Configuration file parsing (`regress.toml`).
//!
//! The config file is optional. When it is absent, the built-in defaults
//! drive a standard CMake project: source in the current directory, output in
//! `build/`, one pass each for `Debug` and `Release` with testing enabled.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "regress.toml";

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct RegressConfig {
    /// Source tree handed to the configure step (`-S`).
    pub source_dir: String,
    /// Output directory, wiped and regenerated per build type (`-B`).
    pub build_dir: String,
    /// Build types to cycle through. An empty list runs a single pass with no
    /// `CMAKE_BUILD_TYPE` define.
    pub build_types: Vec<String>,
    /// Emit `-DBUILD_TESTING=ON` at configure time.
    pub testing: bool,
    /// Extra arguments appended to the configure invocation.
    pub configure_args: Vec<String>,
    pub tools: ToolsConfig,
}

impl Default for RegressConfig {
    fn default() -> Self {
        Self {
            source_dir: ".".to_string(),
            build_dir: "build".to_string(),
            build_types: vec!["Debug".to_string(), "Release".to_string()],
            testing: true,
            configure_args: Vec::new(),
            tools: ToolsConfig::default(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ToolsConfig {
    pub cmake: Option<String>,
    pub ctest: Option<String>,
}

impl ToolsConfig {
    /// Configure/build tool. Precedence: config file, `CMAKE` env var, PATH.
    pub fn cmake(&self) -> String {
        resolve_tool(self.cmake.as_deref(), env::var("CMAKE").ok(), "cmake")
    }

    /// Test runner. Precedence: config file, `CTEST` env var, PATH.
    pub fn ctest(&self) -> String {
        resolve_tool(self.ctest.as_deref(), env::var("CTEST").ok(), "ctest")
    }
}

fn resolve_tool(configured: Option<&str>, env_override: Option<String>, fallback: &str) -> String {
    if let Some(tool) = configured {
        return tool.to_string();
    }
    if let Some(tool) = env_override
        && !tool.is_empty()
    {
        return tool;
    }
    fallback.to_string()
}

/// Load the config file, or the built-in defaults when no file exists.
///
/// An explicitly requested path must exist; the implicit `regress.toml`
/// lookup silently falls back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<RegressConfig> {
    let (file, required) = match path {
        Some(explicit) => (explicit, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    if !file.exists() {
        if required {
            return Err(anyhow::anyhow!(
                "Config file '{}' not found.\n\n\
                💡 Tip: omit --config to run with the built-in defaults.",
                file.display()
            ));
        }
        return Ok(RegressConfig::default());
    }

    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read '{}' - check file permissions", file.display()))?;
    let config: RegressConfig = toml::from_str(&raw).with_context(|| {
        format!(
            "Failed to parse '{}' - check for syntax errors (missing quotes, brackets)",
            file.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_classic_cycle() {
        let config = RegressConfig::default();
        assert_eq!(config.source_dir, ".");
        assert_eq!(config.build_dir, "build");
        assert_eq!(config.build_types, vec!["Debug", "Release"]);
        assert!(config.testing);
        assert!(config.configure_args.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: RegressConfig = toml::from_str("build_dir = \"out\"").unwrap();
        assert_eq!(config.build_dir, "out");
        assert_eq!(config.source_dir, ".");
        assert_eq!(config.build_types, vec!["Debug", "Release"]);
        assert!(config.testing);
    }

    #[test]
    fn test_full_file_overrides() {
        let raw = r#"
source_dir = "lib"
build_dir = "out"
build_types = ["RelWithDebInfo"]
testing = false
configure_args = ["-GNinja"]

[tools]
cmake = "/opt/cmake/bin/cmake"
ctest = "/opt/cmake/bin/ctest"
"#;
        let config: RegressConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.source_dir, "lib");
        assert_eq!(config.build_types, vec!["RelWithDebInfo"]);
        assert!(!config.testing);
        assert_eq!(config.configure_args, vec!["-GNinja"]);
        assert_eq!(config.tools.cmake(), "/opt/cmake/bin/cmake");
        assert_eq!(config.tools.ctest(), "/opt/cmake/bin/ctest");
    }

    #[test]
    fn test_empty_build_types_parse() {
        let config: RegressConfig = toml::from_str("build_types = []").unwrap();
        assert!(config.build_types.is_empty());
    }

    #[test]
    fn test_tool_resolution_precedence() {
        // Config file wins over everything
        assert_eq!(
            resolve_tool(Some("custom"), Some("from-env".to_string()), "cmake"),
            "custom"
        );
        // Env var wins over the fallback
        assert_eq!(
            resolve_tool(None, Some("from-env".to_string()), "cmake"),
            "from-env"
        );
        // Empty env var is ignored
        assert_eq!(resolve_tool(None, Some(String::new()), "cmake"), "cmake");
        assert_eq!(resolve_tool(None, None, "ctest"), "ctest");
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
