use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CinemaHall {
    pub id: i64,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

#[derive(Debug, Clone)]
pub struct NewCinemaHall {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}
