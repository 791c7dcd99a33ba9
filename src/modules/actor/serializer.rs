use async_trait::async_trait;
use tracing::info;

use super::dto::{ActorResponse, CreateActorRequest, UpdateActorRequest};
use super::model::{Actor, NewActor};
use crate::common::error::{AppError, AppResult};
use crate::common::serializer::Serializer;
use crate::infrastructure::db::store::Store;

const ENTITY: &str = "Actor";

pub struct ActorSerializer<'a> {
    store: &'a dyn Store,
}

impl<'a> ActorSerializer<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Serializer for ActorSerializer<'_> {
    type Record = Actor;
    type Create = CreateActorRequest;
    type Update = UpdateActorRequest;
    type Output = ActorResponse;

    async fn fetch(&self, id: i64) -> AppResult<Actor> {
        self.store
            .get_actor(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    async fn list(&self) -> AppResult<Vec<Actor>> {
        self.store.list_actors().await
    }

    async fn create(&self, payload: CreateActorRequest) -> AppResult<Actor> {
        let actor = self
            .store
            .insert_actor(&NewActor {
                first_name: payload.first_name,
                last_name: payload.last_name,
            })
            .await?;
        info!(actor_id = actor.id, "Actor created");
        Ok(actor)
    }

    async fn update(&self, mut instance: Actor, payload: UpdateActorRequest) -> AppResult<Actor> {
        instance.first_name = payload.first_name.unwrap_or(instance.first_name);
        instance.last_name = payload.last_name.unwrap_or(instance.last_name);

        self.store
            .save_actor(&instance)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, instance.id))
    }

    async fn destroy(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_actor(id).await? {
            return Err(AppError::not_found(ENTITY, id));
        }
        info!(actor_id = id, "Actor deleted");
        Ok(())
    }

    async fn to_representation(&self, record: Actor) -> AppResult<ActorResponse> {
        Ok(ActorResponse::from(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::memory::MemoryStore;

    async fn seed(serializer: &ActorSerializer<'_>) -> ActorResponse {
        serializer
            .save_new(CreateActorRequest {
                first_name: "Keanu".to_string(),
                last_name: "Reeves".to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn partial_update_keeps_last_name() {
        let store = MemoryStore::new();
        let serializer = ActorSerializer::new(&store);
        let actor = seed(&serializer).await;

        let update = UpdateActorRequest {
            first_name: Some("Carrie-Anne".to_string()),
            last_name: None,
        };
        let updated = serializer.save_existing(actor.id, update).await.unwrap();

        assert_eq!(updated.first_name, "Carrie-Anne");
        assert_eq!(updated.last_name, "Reeves");

        let stored = serializer.retrieve(actor.id).await.unwrap();
        assert_eq!(stored.last_name, "Reeves");
    }

    #[tokio::test]
    async fn partial_update_keeps_first_name() {
        let store = MemoryStore::new();
        let serializer = ActorSerializer::new(&store);
        let actor = seed(&serializer).await;

        let update = UpdateActorRequest {
            first_name: None,
            last_name: Some("Moss".to_string()),
        };
        let updated = serializer.save_existing(actor.id, update).await.unwrap();

        assert_eq!(updated.first_name, "Keanu");
        assert_eq!(updated.last_name, "Moss");
    }

    #[tokio::test]
    async fn full_update_replaces_both_names() {
        let store = MemoryStore::new();
        let serializer = ActorSerializer::new(&store);
        let actor = seed(&serializer).await;

        let update = UpdateActorRequest::from(CreateActorRequest {
            first_name: "Laurence".to_string(),
            last_name: "Fishburne".to_string(),
        });
        let updated = serializer.save_existing(actor.id, update).await.unwrap();

        assert_eq!(
            (updated.first_name.as_str(), updated.last_name.as_str()),
            ("Laurence", "Fishburne")
        );
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_untouched() {
        let store = MemoryStore::new();
        let serializer = ActorSerializer::new(&store);
        let actor = seed(&serializer).await;

        let update = UpdateActorRequest {
            first_name: Some("x".repeat(300)),
            last_name: Some("Smith".to_string()),
        };
        let err = serializer.save_existing(actor.id, update).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        let stored = serializer.retrieve(actor.id).await.unwrap();
        assert_eq!(stored.first_name, "Keanu");
        assert_eq!(stored.last_name, "Reeves");
    }

    #[tokio::test]
    async fn update_of_missing_actor_is_not_found() {
        let store = MemoryStore::new();
        let serializer = ActorSerializer::new(&store);

        let err = serializer
            .save_existing(5, UpdateActorRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { entity: "Actor", id: 5 }));
    }
}
