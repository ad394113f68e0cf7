mod aggregate;
mod cli;
mod commands;
mod config;
mod derived;
mod error;
mod filter;
mod output;
mod store;
#[cfg(test)]
mod testutil;
mod types;
mod workload;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{BrandCommands, Cli, Commands, MemberCommands, TicketCommands};
use config::Config;
use error::Result;
use store::DataStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_output(cli.json);

    match cli.command {
        // Commands that don't need the data store
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "atelier", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        command => {
            let config = Config::load()?;
            let store = DataStore::open(config.resolve_data_dir(cli.data_dir))?;

            match command {
                Commands::Board(args) => {
                    commands::board::run(&store, &args)?;
                }
                Commands::Tickets(args) => {
                    commands::tickets::list(&store, &args)?;
                }
                Commands::Ticket { action } => match action {
                    TicketCommands::List(args) => {
                        commands::tickets::list(&store, &args)?;
                    }
                    TicketCommands::View { id } => {
                        commands::tickets::view(&store, &id)?;
                    }
                },
                Commands::Brands => {
                    commands::brands::list(&store)?;
                }
                Commands::Brand { action } => match action {
                    BrandCommands::View { id } => {
                        commands::brands::view(&store, &id)?;
                    }
                },
                Commands::Team => {
                    commands::team::list(&store)?;
                }
                Commands::Member { action } => match action {
                    MemberCommands::View { id } => {
                        commands::team::view(&store, &id)?;
                    }
                },
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
