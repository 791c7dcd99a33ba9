pub mod actor;
pub mod cinema_hall;
pub mod genre;
pub mod movie;
