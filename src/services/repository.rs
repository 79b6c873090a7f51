use crate::error::AppError;
use crate::models::Entry;
use crate::services::MongoDb;
use async_trait::async_trait;
use chrono::Utc;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};

/// Persistence seam for glossary entries. Injected into handlers through
/// `AppState` so tests can substitute a double for the live store.
///
/// Field emptiness is the caller's responsibility; the repository never
/// re-validates and never suppresses a store failure.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create(&self, term: &str, interpretation: &str) -> Result<Entry, AppError>;
    async fn fetch_by_id(&self, id: &str) -> Result<Entry, AppError>;
    async fn update_by_id(
        &self,
        id: &str,
        term: &str,
        interpretation: &str,
    ) -> Result<Entry, AppError>;
    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;
    async fn list_all(&self) -> Result<Vec<Entry>, AppError>;
}

#[derive(Clone)]
pub struct MongoEntryRepository {
    db: MongoDb,
}

impl MongoEntryRepository {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for MongoEntryRepository {
    async fn create(&self, term: &str, interpretation: &str) -> Result<Entry, AppError> {
        let entry = Entry::new(term.to_string(), interpretation.to_string());

        self.db
            .entries()
            .insert_one(&entry, None)
            .await
            .map_err(|e| {
                tracing::error!(entry_id = %entry.id, "Failed to insert entry: {}", e);
                AppError::StoreWriteError(anyhow::Error::new(e))
            })?;

        Ok(entry)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Entry, AppError> {
        self.db
            .entries()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(entry_id = %id, "Failed to fetch entry: {}", e);
                AppError::StoreReadError(anyhow::Error::new(e))
            })?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Entry not found")))
    }

    async fn update_by_id(
        &self,
        id: &str,
        term: &str,
        interpretation: &str,
    ) -> Result<Entry, AppError> {
        // Wholesale replacement of both fields; created_at is immutable.
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.db
            .entries()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": {
                    "term": term,
                    "interpretation": interpretation,
                    "updated_at": mongodb::bson::DateTime::from_chrono(Utc::now()),
                } },
                options,
            )
            .await
            .map_err(|e| {
                tracing::error!(entry_id = %id, "Failed to update entry: {}", e);
                AppError::StoreWriteError(anyhow::Error::new(e))
            })?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Entry not found")))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let result = self
            .db
            .entries()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(entry_id = %id, "Failed to delete entry: {}", e);
                AppError::StoreWriteError(anyhow::Error::new(e))
            })?;

        // The store reports a no-op delete as success; surface it as NotFound
        // for a consistent by-id contract.
        if result.deleted_count == 0 {
            return Err(AppError::NotFound(anyhow::anyhow!("Entry not found")));
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Entry>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self
            .db
            .entries()
            .find(doc! {}, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list entries: {}", e);
                AppError::StoreReadError(anyhow::Error::new(e))
            })?;

        let mut entries = Vec::new();
        while let Some(entry) = cursor.try_next().await.map_err(|e| {
            tracing::error!("Failed to read entry from cursor: {}", e);
            AppError::StoreReadError(anyhow::Error::new(e))
        })? {
            entries.push(entry);
        }

        Ok(entries)
    }
}
