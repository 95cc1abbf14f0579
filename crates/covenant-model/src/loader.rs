//! Contract document loading and schema normalization.
//!
//! All recognized legacy spellings (`producer` for the provider party,
//! `providerState` for an interaction's provider state) are mapped onto the
//! canonical model here; no component downstream of loading is aware that
//! alternate spellings exist.

use std::fs;
use std::path::Path;

use crate::types::{ConsumerContract, ContractError};

/// Pluggable reader for contract documents stored on local disk.
pub trait ContractReader {
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Std-fs backed `ContractReader`.
pub struct FsReader;

impl ContractReader for FsReader {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}

impl ConsumerContract {
    /// Parses and normalizes a contract document. Documents produced by any
    /// supported schema generation load to equal models.
    pub fn from_json(raw: &str) -> Result<Self, ContractError> {
        let contract: Self = serde_json::from_str(raw).map_err(|error| ContractError::Schema {
            detail: error.to_string(),
        })?;
        tracing::debug!(
            consumer = contract.consumer.name.as_str(),
            provider = contract.provider.name.as_str(),
            interactions = contract.interactions.len(),
            "loaded contract document"
        );
        Ok(contract)
    }

    pub fn from_reader(reader: &dyn ContractReader, path: &Path) -> Result<Self, ContractError> {
        let raw = reader.read(path).map_err(|source| ContractError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContractError> {
        Self::from_reader(&FsReader, path)
    }
}
