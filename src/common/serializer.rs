use async_trait::async_trait;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::common::error::AppResult;

/// Create/update contract shared by every record type.
///
/// Implementors supply the storage-facing steps; the provided methods run
/// the request flow: field validation, persistence, then mapping the stored
/// record back to its output shape.
#[async_trait]
pub trait Serializer: Send + Sync {
    type Record: Send;
    type Create: Validate + Send + 'static;
    type Update: Validate + Send + 'static;
    type Output: Serialize + Send;

    async fn fetch(&self, id: i64) -> AppResult<Self::Record>;

    async fn list(&self) -> AppResult<Vec<Self::Record>>;

    async fn create(&self, payload: Self::Create) -> AppResult<Self::Record>;

    /// Overwrites the fields present in `payload`, keeping the rest of
    /// `instance` as it was.
    async fn update(
        &self,
        instance: Self::Record,
        payload: Self::Update,
    ) -> AppResult<Self::Record>;

    async fn destroy(&self, id: i64) -> AppResult<()>;

    async fn to_representation(&self, record: Self::Record) -> AppResult<Self::Output>;

    async fn save_new(&self, payload: Self::Create) -> AppResult<Self::Output> {
        payload.validate()?;
        let record = self.create(payload).await?;
        self.to_representation(record).await
    }

    async fn save_existing(&self, id: i64, payload: Self::Update) -> AppResult<Self::Output> {
        payload.validate()?;
        let instance = self.fetch(id).await?;
        let record = self.update(instance, payload).await?;
        self.to_representation(record).await
    }

    async fn retrieve(&self, id: i64) -> AppResult<Self::Output> {
        let record = self.fetch(id).await?;
        self.to_representation(record).await
    }

    async fn list_all(&self) -> AppResult<Vec<Self::Output>> {
        let records = self.list().await?;
        let mut output = Vec::with_capacity(records.len());
        for record in records {
            output.push(self.to_representation(record).await?);
        }
        Ok(output)
    }
}

/// Rejects strings that are empty once surrounding whitespace is dropped.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("blank").with_message("This field may not be blank.".into()),
        );
    }
    Ok(())
}
