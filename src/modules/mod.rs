pub mod health;
pub mod movies;

pub use self::movies::model::Movie;
