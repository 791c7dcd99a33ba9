use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::common::error::AppResult;
use crate::modules::actor::model::{Actor, NewActor};
use crate::modules::actor::repository::ActorStore;
use crate::modules::cinema_hall::model::{CinemaHall, NewCinemaHall};
use crate::modules::cinema_hall::repository::CinemaHallStore;
use crate::modules::genre::model::{Genre, NewGenre};
use crate::modules::genre::repository::{duplicate_name, GenreStore};
use crate::modules::movie::model::{Movie, MovieLinks, NewMovie};
use crate::modules::movie::repository::{unknown_link, MovieStore};

/// Rows keyed by id, with ids handed out the way a serial column would.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Returns `None` when no row with `id` exists.
    fn replace(&mut self, id: i64, row: T) -> Option<T> {
        let slot = self.rows.get_mut(&id)?;
        *slot = row.clone();
        Some(row)
    }

    fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn existing(&self, ids: &[i64]) -> Vec<i64> {
        ids.iter()
            .copied()
            .filter(|id| self.rows.contains_key(id))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

#[derive(Default)]
struct Tables {
    genres: Table<Genre>,
    actors: Table<Actor>,
    cinema_halls: Table<CinemaHall>,
    movies: Table<Movie>,
    movie_genres: BTreeMap<i64, BTreeSet<i64>>,
    movie_actors: BTreeMap<i64, BTreeSet<i64>>,
}

impl Tables {
    fn name_taken(&self, name: &str, exclude: Option<i64>) -> bool {
        self.genres
            .rows
            .values()
            .any(|g| g.name == name && Some(g.id) != exclude)
    }

    /// Same check the join tables' foreign keys make.
    fn check_links(&self, links: &MovieLinks) -> AppResult<()> {
        if !links.genres.iter().all(|id| self.genres.rows.contains_key(id)) {
            return Err(unknown_link("genres"));
        }
        if !links.actors.iter().all(|id| self.actors.rows.contains_key(id)) {
            return Err(unknown_link("actors"));
        }
        Ok(())
    }

    fn replace_links(&mut self, movie_id: i64, links: &MovieLinks) {
        self.movie_genres
            .insert(movie_id, links.genres.iter().copied().collect());
        self.movie_actors
            .insert(movie_id, links.actors.iter().copied().collect());
    }
}

fn unlink(links: &mut BTreeMap<i64, BTreeSet<i64>>, target: i64) {
    for ids in links.values_mut() {
        ids.remove(&target);
    }
}

fn linked(links: &BTreeMap<i64, BTreeSet<i64>>, movie_id: i64) -> Vec<i64> {
    links
        .get(&movie_id)
        .map(|ids| ids.iter().copied().collect())
        .unwrap_or_default()
}

/// Process-local store used when no database is configured, and by tests.
///
/// Mirrors the PostgreSQL schema's constraints: genre names are unique and
/// deleting a movie, genre or actor drops the join rows that point at it.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GenreStore for MemoryStore {
    async fn insert_genre(&self, new: &NewGenre) -> AppResult<Genre> {
        let mut tables = self.tables.lock().await;
        if tables.name_taken(&new.name, None) {
            return Err(duplicate_name());
        }
        Ok(tables.genres.insert_with(|id| Genre {
            id,
            name: new.name.clone(),
        }))
    }

    async fn get_genre(&self, id: i64) -> AppResult<Option<Genre>> {
        Ok(self.tables.lock().await.genres.get(id))
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        Ok(self.tables.lock().await.genres.all())
    }

    async fn save_genre(&self, genre: &Genre) -> AppResult<Option<Genre>> {
        let mut tables = self.tables.lock().await;
        if tables.name_taken(&genre.name, Some(genre.id)) {
            return Err(duplicate_name());
        }
        Ok(tables.genres.replace(genre.id, genre.clone()))
    }

    async fn delete_genre(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        unlink(&mut tables.movie_genres, id);
        Ok(tables.genres.remove(id))
    }

    async fn genre_name_exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.tables.lock().await.name_taken(name, None))
    }

    async fn existing_genre_ids(&self, ids: &[i64]) -> AppResult<Vec<i64>> {
        Ok(self.tables.lock().await.genres.existing(ids))
    }
}

#[async_trait]
impl ActorStore for MemoryStore {
    async fn insert_actor(&self, new: &NewActor) -> AppResult<Actor> {
        Ok(self.tables.lock().await.actors.insert_with(|id| Actor {
            id,
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
        }))
    }

    async fn get_actor(&self, id: i64) -> AppResult<Option<Actor>> {
        Ok(self.tables.lock().await.actors.get(id))
    }

    async fn list_actors(&self) -> AppResult<Vec<Actor>> {
        Ok(self.tables.lock().await.actors.all())
    }

    async fn save_actor(&self, actor: &Actor) -> AppResult<Option<Actor>> {
        Ok(self.tables.lock().await.actors.replace(actor.id, actor.clone()))
    }

    async fn delete_actor(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        unlink(&mut tables.movie_actors, id);
        Ok(tables.actors.remove(id))
    }

    async fn existing_actor_ids(&self, ids: &[i64]) -> AppResult<Vec<i64>> {
        Ok(self.tables.lock().await.actors.existing(ids))
    }
}

#[async_trait]
impl CinemaHallStore for MemoryStore {
    async fn insert_cinema_hall(&self, new: &NewCinemaHall) -> AppResult<CinemaHall> {
        Ok(self.tables.lock().await.cinema_halls.insert_with(|id| CinemaHall {
            id,
            name: new.name.clone(),
            rows: new.rows,
            seats_in_row: new.seats_in_row,
        }))
    }

    async fn get_cinema_hall(&self, id: i64) -> AppResult<Option<CinemaHall>> {
        Ok(self.tables.lock().await.cinema_halls.get(id))
    }

    async fn list_cinema_halls(&self) -> AppResult<Vec<CinemaHall>> {
        Ok(self.tables.lock().await.cinema_halls.all())
    }

    async fn save_cinema_hall(&self, hall: &CinemaHall) -> AppResult<Option<CinemaHall>> {
        Ok(self.tables.lock().await.cinema_halls.replace(hall.id, hall.clone()))
    }

    async fn delete_cinema_hall(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.lock().await.cinema_halls.remove(id))
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn insert_movie(&self, new: &NewMovie, links: &MovieLinks) -> AppResult<Movie> {
        let mut tables = self.tables.lock().await;
        tables.check_links(links)?;
        let movie = tables.movies.insert_with(|id| Movie {
            id,
            title: new.title.clone(),
            description: new.description.clone(),
            duration: new.duration,
        });
        tables.replace_links(movie.id, links);
        Ok(movie)
    }

    async fn get_movie(&self, id: i64) -> AppResult<Option<Movie>> {
        Ok(self.tables.lock().await.movies.get(id))
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        Ok(self.tables.lock().await.movies.all())
    }

    async fn save_movie(&self, movie: &Movie, links: &MovieLinks) -> AppResult<Option<Movie>> {
        let mut tables = self.tables.lock().await;
        tables.check_links(links)?;
        let Some(saved) = tables.movies.replace(movie.id, movie.clone()) else {
            return Ok(None);
        };
        tables.replace_links(saved.id, links);
        Ok(Some(saved))
    }

    async fn delete_movie(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        tables.movie_genres.remove(&id);
        tables.movie_actors.remove(&id);
        Ok(tables.movies.remove(id))
    }

    async fn movie_genre_ids(&self, movie_id: i64) -> AppResult<Vec<i64>> {
        Ok(linked(&self.tables.lock().await.movie_genres, movie_id))
    }

    async fn movie_actor_ids(&self, movie_id: i64) -> AppResult<Vec<i64>> {
        Ok(linked(&self.tables.lock().await.movie_actors, movie_id))
    }
}
