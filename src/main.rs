use std::path::PathBuf;

use clap::Parser;
use desk::cli::commands::Cli;
use desk::cli::handlers;
use desk::io::config_io;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let start = match &cli.dir {
                Some(dir) => PathBuf::from(dir),
                None => match std::env::current_dir() {
                    Ok(cwd) => cwd,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        std::process::exit(1);
                    }
                },
            };
            let config = match config_io::load_config(&start) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = desk::tui::run(&config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
