//! MongoDB-based implementation of TelemetryStore.
//!
//! This module provides the [`MongoStore`] implementation of the
//! [`TelemetryStore`] trait, persisting the three record kinds as documents
//! in their named collections (`transaction`, `trace`, `receipt`).
//!
//! # Sessions
//!
//! [`mongodb::Client`] wraps a shared connection pool; cloning it yields a
//! cheap handle whose resources are released on drop. The pipeline clones
//! one handle per flush, so the shared session's protocol state is never
//! mutated concurrently.
//!
//! # Example
//!
//! ```ignore
//! use txscope_storage::{MongoStore, StoreConfig, TelemetryStore};
//!
//! let store = MongoStore::connect(&StoreConfig::default()).await?;
//! store.insert_transactions(&batch).await?;
//! ```

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use txscope_types::{ReceiptRecord, TraceRecord, TransactionRecord};

use crate::config::StoreConfig;
use crate::error::{Result, StorageError};
use crate::store::{RecordKind, TelemetryStore};

/// MongoDB-backed telemetry store.
pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    /// Establish the store session and verify the server is reachable.
    ///
    /// # Errors
    /// Returns [`StorageError::ConnectionFailed`] when the server does not
    /// answer a ping; this is fatal at process startup.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri).await?;

        // The driver connects lazily; ping so an unreachable store fails
        // startup instead of the first flush.
        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StorageError::ConnectionFailed(err.to_string()))?;

        Ok(Self {
            client,
            database: config.database.clone(),
        })
    }

    fn collection<T>(&self, kind: RecordKind) -> Collection<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        self.client
            .database(&self.database)
            .collection(kind.collection())
    }
}

#[async_trait]
impl TelemetryStore for MongoStore {
    async fn insert_transactions(&self, records: &[TransactionRecord]) -> Result<()> {
        self.collection::<TransactionRecord>(RecordKind::Transaction)
            .insert_many(records)
            .await?;
        Ok(())
    }

    async fn insert_transaction(&self, record: &TransactionRecord) -> Result<()> {
        self.collection::<TransactionRecord>(RecordKind::Transaction)
            .insert_one(record)
            .await?;
        Ok(())
    }

    async fn insert_traces(&self, records: &[TraceRecord]) -> Result<()> {
        self.collection::<TraceRecord>(RecordKind::Trace)
            .insert_many(records)
            .await?;
        Ok(())
    }

    async fn insert_trace(&self, record: &TraceRecord) -> Result<()> {
        self.collection::<TraceRecord>(RecordKind::Trace)
            .insert_one(record)
            .await?;
        Ok(())
    }

    async fn insert_receipts(&self, records: &[ReceiptRecord]) -> Result<()> {
        self.collection::<ReceiptRecord>(RecordKind::Receipt)
            .insert_many(records)
            .await?;
        Ok(())
    }

    async fn insert_receipt(&self, record: &ReceiptRecord) -> Result<()> {
        self.collection::<ReceiptRecord>(RecordKind::Receipt)
            .insert_one(record)
            .await?;
        Ok(())
    }

    async fn has_record(&self, kind: RecordKind, tx_hash: &str) -> Result<bool> {
        let found = match kind {
            RecordKind::Transaction => self
                .collection::<TransactionRecord>(kind)
                .find_one(doc! { "hash": tx_hash })
                .await?
                .is_some(),
            RecordKind::Trace => self
                .collection::<TraceRecord>(kind)
                .find_one(doc! { "tx_hash": tx_hash })
                .await?
                .is_some(),
            RecordKind::Receipt => self
                .collection::<ReceiptRecord>(kind)
                .find_one(doc! { "tx_hash": tx_hash })
                .await?
                .is_some(),
        };
        Ok(found)
    }
}
