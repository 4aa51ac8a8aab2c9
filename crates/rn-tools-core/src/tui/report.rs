//! Terminal progress and result reporting
//!
//! Child processes inherit stdio, so a live redrawn screen would interleave
//! with their output; instead each progress event appends one styled line
//! with a step counter and a progress bar, and the final result is rendered
//! as a status plus output block.

use crate::descriptor::{CommandDescriptor, ExecutionResult};
use crate::exec::ProgressSink;
use anyhow::Result;
use colored::Colorize;

const BAR_WIDTH: usize = 20;

/// Render a textual progress bar with percentage, e.g. `>>>>>----- 50%`
pub fn render_bar(current: usize, total: usize) -> String {
    let total = total.max(1);
    let ratio = current as f64 / total as f64;
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let percentage = (ratio * 100.0).round() as usize;
    format!(
        "{}{} {}%",
        ">".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percentage
    )
}

/// Progress sink that appends one line per step
pub struct StepReporter;

impl StepReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StepReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for StepReporter {
    fn report(&mut self, step_index: usize, total_steps: usize, label: &str) {
        println!(
            "{} {}  {}",
            format!("[{}/{}]", step_index + 1, total_steps).dimmed(),
            label.cyan(),
            render_bar(step_index, total_steps).green()
        );
    }
}

/// Render the final command report: label, status, output block
pub fn print_result(descriptor: &CommandDescriptor, result: &ExecutionResult) -> Result<()> {
    let status = if result.succeeded {
        "Success".green().bold()
    } else {
        "Error".red().bold()
    };

    println!();
    println!("{} {}", "Command:".dimmed(), descriptor.label().bold());
    println!("{} {}", "Status:".dimmed(), status);
    println!();
    for line in result.output.lines() {
        println!("  {line}");
    }

    if result.succeeded {
        cliclack::outro("Done")?;
    } else {
        cliclack::outro_cancel("Finished with errors")?;
    }
    Ok(())
}
