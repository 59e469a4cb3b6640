//! Local backend: each collection is one JSON entry in the `entries` table.

use async_trait::async_trait;
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{Mutex, MutexGuard};

use super::{keys, seed_events, seed_team, FundraisingStore};
use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{
    Donation, Event, NewDonation, NewEvent, StoredTotals, TeamMember, Totals,
};

/// Raw entry values captured before a destructive operation.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageSnapshot {
    entries: Vec<(&'static str, Option<String>)>,
}

pub struct LocalStore {
    repo: Repository,
    goal: f64,
    /// Serializes every read and write within this process.
    lock: Mutex<()>,
}

/// Exclusive access to a [`LocalStore`]. Other callers wait until it is dropped.
pub struct StoreSession<'a> {
    store: &'a LocalStore,
    _guard: MutexGuard<'a, ()>,
}

impl LocalStore {
    pub fn new(repo: Repository, goal: f64) -> Self {
        Self {
            repo,
            goal,
            lock: Mutex::new(()),
        }
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    /// Lock the store for a sequence of operations.
    pub async fn session(&self) -> StoreSession<'_> {
        StoreSession {
            store: self,
            _guard: self.lock.lock().await,
        }
    }
}

impl StoreSession<'_> {
    pub fn goal(&self) -> f64 {
        self.store.goal
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.store.repo.get_item(key).await? {
            Some(raw) => Ok(serde_json::from_str::<Option<T>>(&raw)?),
            None => Ok(None),
        }
    }

    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        self.store.repo.set_item(key, &raw).await
    }

    /// Write `seed` under `key` unless a collection is already stored there.
    async fn seed_if_absent<T: Serialize>(&self, key: &str, seed: Vec<T>) -> Result<(), AppError> {
        let stored = self.read_json::<serde_json::Value>(key).await?;
        if stored.is_none() {
            tracing::info!("Seeding {} with {} default entries", key, seed.len());
            self.write_json(key, &seed).await?;
        }
        Ok(())
    }

    /// Capture the raw values of every collection.
    pub async fn backup(&self) -> Result<StorageSnapshot, AppError> {
        let mut entries = Vec::with_capacity(keys::ALL.len());
        for key in keys::ALL {
            entries.push((key, self.store.repo.get_item(key).await?));
        }
        Ok(StorageSnapshot { entries })
    }

    /// Remove every collection.
    pub async fn clear(&self) -> Result<(), AppError> {
        let writes: Vec<(&str, Option<String>)> =
            keys::ALL.iter().map(|key| (*key, None)).collect();
        self.store.repo.write_batch(&writes).await
    }

    /// Put back a snapshot; keys absent at backup time are removed.
    pub async fn restore(&self, snapshot: StorageSnapshot) -> Result<(), AppError> {
        self.store.repo.write_batch(&snapshot.entries).await
    }

    pub async fn seed(&self) -> Result<(), AppError> {
        self.seed_if_absent(keys::EVENTS, seed_events()).await?;
        self.seed_if_absent(keys::TEAM, seed_team()).await
    }

    pub async fn totals(&self) -> Result<Totals, AppError> {
        let stored = self
            .read_json::<StoredTotals>(keys::TOTALS)
            .await?
            .unwrap_or_default();
        Ok(stored.resolve(self.store.goal))
    }

    pub async fn donations(&self) -> Result<Vec<Donation>, AppError> {
        Ok(self.read_json(keys::DONATIONS).await?.unwrap_or_default())
    }

    pub async fn events(&self) -> Result<Vec<Event>, AppError> {
        self.seed_if_absent(keys::EVENTS, seed_events()).await?;
        Ok(self.read_json(keys::EVENTS).await?.unwrap_or_default())
    }

    pub async fn team(&self) -> Result<Vec<TeamMember>, AppError> {
        self.seed_if_absent(keys::TEAM, seed_team()).await?;
        Ok(self.read_json(keys::TEAM).await?.unwrap_or_default())
    }

    /// Update the totals and append to the donation log in one transaction.
    pub async fn record_donation(&self, donation: NewDonation) -> Result<Totals, AppError> {
        let updated = self.totals().await?.apply(donation.amount).ok_or_else(|| {
            AppError::Validation("Donation amount is too large".to_string())
        })?;

        let mut all = self.donations().await?;
        all.push(Donation {
            id: uuid::Uuid::new_v4().to_string(),
            amount: donation.amount,
            source: donation.source,
            name: donation.name,
            email: donation.email,
            ts: Utc::now().timestamp_millis(),
        });

        self.store
            .repo
            .write_batch(&[
                (keys::TOTALS, Some(serde_json::to_string(&updated)?)),
                (keys::DONATIONS, Some(serde_json::to_string(&all)?)),
            ])
            .await?;

        tracing::info!(
            "Recorded {} donation of {:.2}; total now {:.2}",
            donation.source.as_str(),
            donation.amount,
            updated.total_raised
        );

        Ok(updated)
    }

    pub async fn record_event(&self, event: NewEvent) -> Result<Vec<Event>, AppError> {
        let mut list = self.events().await?;
        list.push(event.into_event(uuid::Uuid::new_v4().to_string()));
        self.write_json(keys::EVENTS, &list).await?;

        tracing::info!("Recorded event; {} events stored", list.len());

        Ok(list)
    }
}

#[async_trait]
impl FundraisingStore for LocalStore {
    async fn initialize(&self) -> Result<(), AppError> {
        self.session().await.seed().await
    }

    async fn get_totals(&self) -> Result<Totals, AppError> {
        self.session().await.totals().await
    }

    async fn list_donations(&self) -> Result<Vec<Donation>, AppError> {
        self.session().await.donations().await
    }

    async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        self.session().await.events().await
    }

    async fn list_team(&self) -> Result<Vec<TeamMember>, AppError> {
        self.session().await.team().await
    }

    async fn record_donation(&self, donation: NewDonation) -> Result<Totals, AppError> {
        self.session().await.record_donation(donation).await
    }

    async fn record_event(&self, event: NewEvent) -> Result<Vec<Event>, AppError> {
        self.session().await.record_event(event).await
    }
}
