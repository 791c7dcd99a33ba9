use crate::infrastructure::db::pool::DbPool;
use crate::modules::actor::repository::ActorStore;
use crate::modules::cinema_hall::repository::CinemaHallStore;
use crate::modules::genre::repository::GenreStore;
use crate::modules::movie::repository::MovieStore;

/// Everything a serializer may call into.
pub trait Store: GenreStore + ActorStore + CinemaHallStore + MovieStore {}

impl<T> Store for T where T: GenreStore + ActorStore + CinemaHallStore + MovieStore {}

/// PostgreSQL-backed store. The per-record queries live next to each
/// module in its `repository.rs`.
#[derive(Clone)]
pub struct PgStore {
    pub(crate) pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
