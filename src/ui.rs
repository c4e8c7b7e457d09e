//! Terminal UI utilities.
//!
//! A small table for the end-of-run summary, drawn with Unicode box
//! characters. Cells may carry ANSI color codes; widths are computed on the
//! visible text and capped so the table stays inside the terminal.

use colored::*;
use console::{Term, measure_text_width, truncate_str};
use std::cmp;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        let (_height, term_width) = Term::stdout().size();
        let cap = column_cap(term_width as usize, self.headers.len());

        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| cmp::min(cap, measure_text_width(h)))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = cmp::max(widths[i], cmp::min(cap, measure_text_width(cell)));
            }
        }

        let rule = |left: &str, mid: &str, right: &str| {
            let mut line = String::from("  ");
            line.push_str(left);
            for (i, width) in widths.iter().enumerate() {
                line.push_str(&"─".repeat(width + 2));
                line.push_str(if i + 1 == widths.len() { right } else { mid });
            }
            line
        };

        println!("{}", rule("┌", "┬", "┐"));
        print_cells(&self.headers, &widths, true);
        println!("{}", rule("├", "┼", "┤"));
        for row in &self.rows {
            print_cells(row, &widths, false);
        }
        println!("{}", rule("└", "┴", "┘"));
    }
}

fn print_cells(cells: &[String], widths: &[usize], bold: bool) {
    print!("  │");
    for (i, cell) in cells.iter().enumerate() {
        let shown = truncate_str(cell, widths[i], "...");
        let padding = widths[i].saturating_sub(measure_text_width(&shown));
        if bold {
            print!(" {} {}│", shown.as_ref().bold(), " ".repeat(padding));
        } else {
            print!(" {} {}│", shown, " ".repeat(padding));
        }
    }
    println!();
}

// Widest a single column may get: terminal width minus the indent, borders
// and cell padding, split evenly. Never below 8 so tiny terminals still get
// legible cells.
fn column_cap(term_width: usize, columns: usize) -> usize {
    let overhead = 3 + 3 * columns;
    cmp::max(8, term_width.saturating_sub(overhead) / cmp::max(1, columns))
}
