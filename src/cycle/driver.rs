//! The clean-configure-build-test loop.
//!
//! One iteration per configured build type: wipe the build directory, run
//! the configure step, compile, then run the test suite from inside the
//! build directory with one job per logical core. A configure or build
//! failure terminates the process immediately with the child's own exit
//! code. The test suite's exit status is recorded for the summary but does
//! not affect the process exit code.

use anyhow::Result;
use colored::*;
use std::path::Path;
use std::time::Instant;

use super::clean::remove_build_dir;
use super::report::{self, CycleRecord};
use super::steps;
use crate::config::RegressConfig;
use crate::exec;
use crate::workdir::ScopedDir;

pub fn run(config: &RegressConfig, verbose: bool) -> Result<()> {
    let cmake = config.tools.cmake();
    let ctest = config.tools.ctest();

    // An empty list means one pass with no CMAKE_BUILD_TYPE define.
    let flavors: Vec<Option<&str>> = if config.build_types.is_empty() {
        vec![None]
    } else {
        config.build_types.iter().map(|f| Some(f.as_str())).collect()
    };

    println!(
        "{} Regression cycle: {} configuration{}",
        "🚀".cyan(),
        flavors.len(),
        if flavors.len() == 1 { "" } else { "s" }
    );

    let jobs = num_cpus::get();
    let build_dir = Path::new(&config.build_dir);
    let started = Instant::now();
    let mut records = Vec::new();

    for (index, flavor) in flavors.iter().enumerate() {
        let label = flavor.unwrap_or("default");
        let flavor_started = Instant::now();

        println!(
            "\n{} [{}/{}] {}",
            "📦".blue(),
            index + 1,
            flavors.len(),
            label.bold()
        );

        if remove_build_dir(build_dir)? {
            println!("   {} Removed stale {}/", "🧹".yellow(), config.build_dir);
        }

        println!("   {} Configuring...", "⚙".cyan());
        let status = exec::run_tool(&cmake, &steps::configure_args(config, *flavor))?;
        if !status.success() {
            let code = exec::exit_code(&status);
            println!("{} Configure failed with code {}", "x".red(), code);
            std::process::exit(code);
        }

        println!("   {} Building...", "🔨".blue());
        let status = exec::run_tool(&cmake, &steps::build_args(config))?;
        if !status.success() {
            let code = exec::exit_code(&status);
            println!("{} Build failed with code {}", "x".red(), code);
            std::process::exit(code);
        }

        println!("   {} Testing ({} jobs)...", "🧪".magenta(), jobs);
        let test_status = {
            let _guard = ScopedDir::enter(build_dir)?;
            exec::run_tool(&ctest, &steps::test_args(jobs, verbose))?
        };

        records.push(CycleRecord {
            label: label.to_string(),
            test_code: exec::exit_code(&test_status),
            elapsed: flavor_started.elapsed(),
        });
    }

    report::print_summary(&records);
    println!(
        "\n{} Cycle complete in {:.2?}",
        "✓".green(),
        started.elapsed()
    );

    Ok(())
}
