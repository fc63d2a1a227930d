use chrono::Utc;
use prandaan_matcher::rebuild_matches;
use prandaan_types::{Donor, DonorId, Match, Recipient, RecipientId};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

use crate::{NewDonor, NewRecipient, RegistryError, RegistryResult};

/// Aggregate counts over the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub donors: usize,
    pub recipients: usize,
    pub matches: usize,
}

/// In-memory store of donors, recipients and their current matches.
///
/// Records are append-only. The match set is rebuilt from scratch after
/// every registration.
#[derive(Debug, Default)]
pub struct Registry {
    donors: Vec<Donor>,
    recipients: Vec<Recipient>,
    matches: Vec<Match>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a donor, then rebuilds matches.
    ///
    /// On a validation error nothing is stored.
    pub fn register_donor(&mut self, payload: NewDonor) -> RegistryResult<Donor> {
        let id = DonorId::from_position(self.donors.len());
        let donor = payload.into_donor(id, Utc::now()).inspect_err(|e| {
            warn!("Rejected donor registration: {}", e);
        })?;

        self.donors.push(donor.clone());
        self.rebuild();
        info!(
            "Registered donor {} ({} matches)",
            donor.id,
            self.matches.len()
        );
        Ok(donor)
    }

    /// Validates and stores a recipient, then rebuilds matches.
    ///
    /// On a validation error nothing is stored.
    pub fn register_recipient(&mut self, payload: NewRecipient) -> RegistryResult<Recipient> {
        let id = RecipientId::from_position(self.recipients.len());
        let recipient = payload.into_recipient(id, Utc::now()).inspect_err(|e| {
            warn!("Rejected recipient registration: {}", e);
        })?;

        self.recipients.push(recipient.clone());
        self.rebuild();
        info!(
            "Registered recipient {} ({} matches)",
            recipient.id,
            self.matches.len()
        );
        Ok(recipient)
    }

    fn rebuild(&mut self) {
        self.matches = rebuild_matches(&self.donors, &self.recipients);
    }

    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Current matches, highest urgency first.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn stats(&self) -> Stats {
        Stats {
            donors: self.donors.len(),
            recipients: self.recipients.len(),
            matches: self.matches.len(),
        }
    }
}

/// A [`Registry`] shared between request handlers.
///
/// Registration holds the write lock across the append and the match
/// rebuild, so readers never observe a list without its matches.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Creates a handle around an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing registry.
    #[must_use]
    pub fn from_registry(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, Registry>> {
        self.inner
            .read()
            .map_err(|_| RegistryError::Internal("registry lock poisoned".to_string()))
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, Registry>> {
        self.inner
            .write()
            .map_err(|_| RegistryError::Internal("registry lock poisoned".to_string()))
    }

    pub fn register_donor(&self, payload: NewDonor) -> RegistryResult<Donor> {
        self.write()?.register_donor(payload)
    }

    pub fn register_recipient(&self, payload: NewRecipient) -> RegistryResult<Recipient> {
        self.write()?.register_recipient(payload)
    }

    pub fn donors(&self) -> RegistryResult<Vec<Donor>> {
        Ok(self.read()?.donors().to_vec())
    }

    pub fn recipients(&self) -> RegistryResult<Vec<Recipient>> {
        Ok(self.read()?.recipients().to_vec())
    }

    pub fn matches(&self) -> RegistryResult<Vec<Match>> {
        Ok(self.read()?.matches().to_vec())
    }

    pub fn stats(&self) -> RegistryResult<Stats> {
        Ok(self.read()?.stats())
    }
}
