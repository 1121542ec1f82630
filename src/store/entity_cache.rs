use std::collections::HashMap;

use crate::models::{Movie, MovieId};

/// Session-local cache of the last-seen snapshot of every rendered movie
///
/// Entries are overwritten by newer snapshots and never evicted; movie sets
/// are small and the cache dies with the session.
#[derive(Debug, Default, Clone)]
pub struct EntityCache {
    movies: HashMap<MovieId, Movie>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snapshot, returning the one it replaced
    pub fn put(&mut self, movie: Movie) -> Option<Movie> {
        self.movies.insert(movie.id, movie)
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.movies.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
