pub mod movie;
pub mod review;

pub use movie::{Genre, GenreError, Movie, MovieFields, MovieInput};
pub use review::{Review, ReviewInput};
