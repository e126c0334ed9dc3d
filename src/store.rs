use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use mongodb::{Client, Collection};
use tracing::info;

use crate::config::MongoConfig;
use crate::errors::StoreError;
use crate::models::Cat;

/// Client for the cats collection.
///
/// Every operation returns an explicit `Result` so callers can always
/// tell a failed call from a legitimately empty one. The interactive
/// demo binary is the place where failures get logged and replaced
/// with safe defaults.
#[derive(Clone)]
pub struct CatStore {
    collection: Collection<Cat>,
}

impl CatStore {
    /// Connect and verify the server is reachable.
    ///
    /// The ping command is cheap and does not require auth, so a
    /// successful return means the deployment is actually live, not
    /// just that the URI parsed.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(StoreError::Connection)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::Connection)?;

        info!(
            database = %config.database,
            collection = %config.collection,
            "connected to MongoDB"
        );

        let collection = client
            .database(&config.database)
            .collection::<Cat>(&config.collection);

        Ok(Self { collection })
    }

    /// Insert a new cat unconditionally (no uniqueness check on name)
    /// and return the generated identifier.
    pub async fn create(
        &self,
        name: &str,
        age: i32,
        features: Vec<String>,
    ) -> Result<ObjectId, StoreError> {
        let cat = Cat::new(name, age, features);
        let result = self.collection.insert_one(&cat).await?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid),
            other => Err(StoreError::UnexpectedId(other.to_string())),
        }
    }

    /// Every cat in the collection. An empty vec means the collection
    /// is empty; query failures surface as errors.
    pub async fn all(&self) -> Result<Vec<Cat>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// First cat with the given name, or None.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Cat>, StoreError> {
        Ok(self.collection.find_one(doc! { "name": name }).await?)
    }

    /// Set the age on the first cat matching the name. Returns whether
    /// a match was found.
    pub async fn update_age(&self, name: &str, new_age: i32) -> Result<bool, StoreError> {
        let result = self
            .collection
            .update_one(doc! { "name": name }, doc! { "$set": { "age": new_age } })
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Add a feature to the first cat matching the name. `$addToSet`
    /// keeps the operation idempotent: re-adding an existing feature
    /// leaves the list unchanged. Returns whether a match was found.
    pub async fn add_feature(&self, name: &str, feature: &str) -> Result<bool, StoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "name": name },
                doc! { "$addToSet": { "features": feature } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Delete the first cat matching the name. Returns whether anything
    /// was deleted.
    pub async fn delete_by_name(&self, name: &str) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "name": name }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Delete every cat and return the count removed.
    ///
    /// Confirmation is deliberately NOT part of this operation; the
    /// caller decides (interactively or via a flag) before invoking it,
    /// which keeps the operation itself testable.
    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    /// Bulk delete gated on an explicit confirmation. Declining is a
    /// no-op reported as zero deletions.
    pub async fn delete_all_confirmed(&self, confirmed: bool) -> Result<u64, StoreError> {
        if !confirmed {
            return Ok(0);
        }
        self.delete_all().await
    }
}

/// Parse a yes/no answer from the bulk-delete prompt.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
