//! The data-access collaborator: one immutable snapshot of the entity
//! collections, loaded from JSON files or the embedded sample dataset.
//!
//! Everything downstream (filters, aggregation, derived state) reads
//! from this snapshot and never writes back.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{AtelierError, Result};
use crate::types::{Brand, TeamMember, Ticket};

pub const BRANDS_FILE: &str = "brands.json";
pub const TEAM_FILE: &str = "team.json";
pub const TICKETS_FILE: &str = "tickets.json";

pub const SAMPLE_BRANDS: &str = include_str!("../fixtures/brands.json");
pub const SAMPLE_TEAM: &str = include_str!("../fixtures/team.json");
pub const SAMPLE_TICKETS: &str = include_str!("../fixtures/tickets.json");

#[derive(Debug)]
pub struct DataStore {
    pub brands: Vec<Brand>,
    pub members: Vec<TeamMember>,
    pub tickets: Vec<Ticket>,
}

impl DataStore {
    /// Load the three collections from a data directory.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(DataStore {
            brands: read_collection(&dir.join(BRANDS_FILE))?,
            members: read_collection(&dir.join(TEAM_FILE))?,
            tickets: read_collection(&dir.join(TICKETS_FILE))?,
        })
    }

    /// Build the store from the embedded sample dataset.
    pub fn sample() -> Result<Self> {
        Ok(DataStore {
            brands: parse_embedded(SAMPLE_BRANDS, BRANDS_FILE)?,
            members: parse_embedded(SAMPLE_TEAM, TEAM_FILE)?,
            tickets: parse_embedded(SAMPLE_TICKETS, TICKETS_FILE)?,
        })
    }

    /// Load from `dir` when configured, otherwise fall back to sample data.
    pub fn open(dir: Option<PathBuf>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load(&dir),
            None => Self::sample(),
        }
    }

    pub fn brand(&self, id: &str) -> Result<&Brand> {
        self.brands
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| AtelierError::BrandNotFound(id.to_string()))
    }

    pub fn member(&self, id: &str) -> Result<&TeamMember> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| AtelierError::MemberNotFound(id.to_string()))
    }

    pub fn ticket(&self, id: &str) -> Result<&Ticket> {
        self.tickets
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AtelierError::TicketNotFound(id.to_string()))
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = std::fs::read_to_string(path).map_err(|e| AtelierError::DataRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| AtelierError::DataParse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_embedded<T: DeserializeOwned>(contents: &str, name: &str) -> Result<Vec<T>> {
    serde_json::from_str(contents).map_err(|e| AtelierError::DataParse {
        path: PathBuf::from(format!("<embedded>/{name}")),
        source: e,
    })
}
