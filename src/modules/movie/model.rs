use sqlx::FromRow;

/// Scalar columns of a movie; genre and actor links live in join tables.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i32,
}

#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub duration: i32,
}

/// The full genre and actor id sets a movie is written with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieLinks {
    pub genres: Vec<i64>,
    pub actors: Vec<i64>,
}
