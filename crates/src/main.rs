// Entry point: parses options, runs a listing subcommand or the TUI.

use std::process;

use clap::Parser;
use ptable::catalog::Catalog;
use ptable::cli::{self, Cli, Command};

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

async fn dispatch(cli: Cli) -> Result<(), ptable::Error> {
    if let Some(path) = &cli.log_file {
        ptable::logging::init_file_logging(path)?;
    }

    let catalog = Catalog::builtin();
    match &cli.command {
        Some(Command::List { filter, search }) => {
            print_lines(cli::list_lines(&catalog, *filter, search));
            Ok(())
        }
        Some(Command::Show { query }) => {
            println!("{}", cli::show_text(&catalog, query)?);
            Ok(())
        }
        Some(Command::Categories) => {
            print_lines(cli::categories_lines());
            Ok(())
        }
        None => ptable::ui::run(cli.launch_options()).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = dispatch(cli).await {
        tracing::error!(error = %e, "ptable failed");
        eprintln!("ptable: {e}");
        process::exit(2);
    }
}
