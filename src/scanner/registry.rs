//! Known-signature registries.
//!
//! The engine asks a registry whether a sender was seen before. The default
//! registry is empty, so every sender counts as new.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use alloy::primitives::Address;
use thiserror::Error;

use crate::blockchain::{normalize_address, AddressError};

/// Set of sender addresses already known before the scan.
pub trait KnownSignatures {
    fn is_known(&self, address: &Address) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registry with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRegistry;

impl KnownSignatures for EmptyRegistry {
    fn is_known(&self, _address: &Address) -> bool {
        false
    }

    fn len(&self) -> usize {
        0
    }
}

/// Errors loading a registry file.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Registry file is not a JSON array of strings: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Registry entry {index}: {source}")]
    Address { index: usize, source: AddressError },
}

/// In-memory registry backed by a hash set.
#[derive(Debug, Clone, Default)]
pub struct SignatureRegistry {
    inner: HashSet<Address>,
}

impl SignatureRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of address strings. Every entry is normalized.
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let reader = BufReader::new(File::open(path)?);
        let entries: Vec<String> = serde_json::from_reader(reader)?;

        let mut registry = Self::new();
        for (index, entry) in entries.iter().enumerate() {
            let address = normalize_address(entry)
                .map_err(|source| RegistryError::Address { index, source })?;
            registry.insert(address);
        }

        tracing::info!(
            path = %path.display(),
            known = registry.inner.len(),
            "Loaded known signature registry"
        );
        Ok(registry)
    }

    /// Add an address. Returns false if it was already present.
    pub fn insert(&mut self, address: Address) -> bool {
        self.inner.insert(address)
    }
}

impl FromIterator<Address> for SignatureRegistry {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl KnownSignatures for SignatureRegistry {
    fn is_known(&self, address: &Address) -> bool {
        self.inner.contains(address)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
