use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{AtelierError, Result};
use crate::store;

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Atelier CLI Configuration");
    println!("=========================\n");

    print!("Data directory for brands.json/team.json/tickets.json [leave empty for sample data]: ");
    io::stdout().flush()?;

    let mut data_dir = String::new();
    io::stdin().read_line(&mut data_dir)?;
    let data_dir = data_dir.trim();

    if !data_dir.is_empty() {
        let dir = Path::new(data_dir);
        if !dir.join(store::TICKETS_FILE).exists() {
            print!("No data files found there. Seed with the sample dataset? [y/N] ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if input.trim().eq_ignore_ascii_case("y") {
                seed(dir)?;
                println!("Sample dataset written to {}", dir.display());
            }
        }
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AtelierError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let mut config_content = String::new();
    if !data_dir.is_empty() {
        config_content.push_str(&format!("data_dir = \"{data_dir}\"\n"));
    }

    std::fs::write(&config_path, config_content).map_err(|e| AtelierError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'atelier' commands!");

    Ok(())
}

/// Write the embedded sample dataset into a data directory.
fn seed(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    for (name, contents) in [
        (store::BRANDS_FILE, store::SAMPLE_BRANDS),
        (store::TEAM_FILE, store::SAMPLE_TEAM),
        (store::TICKETS_FILE, store::SAMPLE_TICKETS),
    ] {
        let path = dir.join(name);
        std::fs::write(&path, contents).map_err(|e| AtelierError::DataRead {
            path,
            source: e,
        })?;
    }
    Ok(())
}
