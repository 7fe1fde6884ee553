pub mod prelude;

pub mod movies;
pub mod reviews;
