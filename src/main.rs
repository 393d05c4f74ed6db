use std::path::Path;

use clap::Parser;
use supportdesk::cli::commands::Cli;
use supportdesk::cli::handlers;
use supportdesk::util::logging;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand → launch TUI
            handlers::resolve_start(cli.project_dir.as_deref()).and_then(|start| {
                supportdesk::tui::run(&start, cli.data.as_deref().map(Path::new))
            })
        }
        Some(_) => {
            logging::init_cli();
            handlers::dispatch(cli)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
