//! Modes command implementation
//!
//! Lists the available step patterns.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{self, config_error_to_json};
use crate::config::load_mode_table;

/// Run the modes command
///
/// # Arguments
/// * `modes_path` - Optional JSON file with extra step patterns
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(modes_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let result = load_mode_table(modes_path);
    if json_output {
        return json_output::emit(result.map_err(|e| config_error_to_json(&e)));
    }

    let table = result?;
    println!("{} {}", "Modes:".cyan().bold(), table.len());
    let width = table.names().map(str::len).max().unwrap_or(0);
    for (name, steps) in table.iter() {
        let steps: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
        println!("  {:<width$}  {}", name, steps.join(" ").dimmed(), width = width);
    }
    Ok(ExitCode::SUCCESS)
}
