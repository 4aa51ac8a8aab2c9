//! rn-tools CLI - Interactive wrapper for React Native development
//!
//! Scaffolds new projects from the bundled template and routes maintenance
//! commands (clean, pod install, run on Android) to the project's npm
//! scripts. The whole surface is interactive; flags only cover help, version
//! and the template directory override.

use anyhow::Result;
use clap::Parser;
use rn_tools_core::tui::RunArgs;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "rn-tools")]
#[command(about = "Interactive CLI wrapper for React Native development")]
#[command(version)]
pub struct Args {
    /// Local template directory to scaffold from (defaults to
    /// RN_TOOLS_TEMPLATE_DIR, then the current directory)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully; interrupt is a cancellation, not an error
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(0);
    })
    .ok();

    let args = Args::parse();
    let run_args = RunArgs {
        template_dir: args.template_dir,
    };

    let result = rn_tools_core::run(run_args, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
