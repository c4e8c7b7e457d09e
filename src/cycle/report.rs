//! End-of-run summary.
//!
//! The test step's exit status never changes the process exit code; it is
//! surfaced here instead, so a failing suite is still visible at a glance.

use colored::*;
use std::time::Duration;

use crate::ui::Table;

pub struct CycleRecord {
    pub label: String,
    pub test_code: i32,
    pub elapsed: Duration,
}

pub fn print_summary(records: &[CycleRecord]) {
    if records.is_empty() {
        return;
    }

    println!();
    let mut table = Table::new(&["Configuration", "Tests", "Time"]);
    for record in records {
        let tests = if record.test_code == 0 {
            "ok".green().to_string()
        } else {
            format!("failed (code {})", record.test_code)
                .yellow()
                .to_string()
        };
        table.add_row(vec![
            record.label.bold().to_string(),
            tests,
            format!("{:.2?}", record.elapsed),
        ]);
    }
    table.print();
}
