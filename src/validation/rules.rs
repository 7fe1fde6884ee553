use chrono::Datelike;

use super::{ValidationContext, ValidationFailure};
use crate::models::{Genre, MovieInput};

pub const FAMILY_MOVIE_MESSAGE: &str = "Movies for the G [General] audience must be Family movies.";
pub const UNPUBLISHED_RATING_MESSAGE: &str =
    "Movies that are not yet published may not have ratings.";
pub const PUBLISHED_RATING_MESSAGE: &str =
    "Published movies must have a rating of 'G', 'PG', 'PG-13', or 'R'.";

const PUBLISHED_RATINGS: [&str; 4] = ["G", "PG", "PG-13", "R"];

/// A check over a candidate movie.
///
/// Rules hold no mutable state; equal inputs give equal results.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, movie: &MovieInput, ctx: &ValidationContext) -> Result<(), ValidationFailure>;
}

/// Movies for the general ("G") audience must be Family movies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyMovie;

impl Rule for FamilyMovie {
    fn name(&self) -> &'static str {
        "family_movie"
    }

    fn check(&self, movie: &MovieInput, _ctx: &ValidationContext) -> Result<(), ValidationFailure> {
        // A missing genre is reported by the required check.
        let Some(genre) = movie.genre else {
            return Ok(());
        };

        if movie.audience() == Some("G") && genre != Genre::Family {
            return Err(ValidationFailure::new(FAMILY_MOVIE_MESSAGE));
        }
        Ok(())
    }
}

/// Vintage movies must be released before the cutoff year.
#[derive(Debug, Clone, Copy)]
pub struct Vintage {
    cutoff_year: i32,
}

impl Vintage {
    #[must_use]
    pub const fn new(cutoff_year: i32) -> Self {
        Self { cutoff_year }
    }
}

impl Rule for Vintage {
    fn name(&self) -> &'static str {
        "vintage"
    }

    fn check(&self, movie: &MovieInput, _ctx: &ValidationContext) -> Result<(), ValidationFailure> {
        if movie.genre != Some(Genre::Vintage) {
            return Ok(());
        }
        let Some(release_date) = movie.release_date else {
            return Ok(());
        };

        if release_date.year() < self.cutoff_year {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!(
                "Vintage movies must have a release year earlier than {}.",
                self.cutoff_year
            )))
        }
    }
}

/// Only published movies carry a content rating.
///
/// A movie is published once its release date is not after `ctx.today()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateWhenPublished;

impl RateWhenPublished {
    fn is_published_rating(rating: &str) -> bool {
        PUBLISHED_RATINGS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(rating))
    }
}

impl Rule for RateWhenPublished {
    fn name(&self) -> &'static str {
        "rate_when_published"
    }

    fn check(&self, movie: &MovieInput, ctx: &ValidationContext) -> Result<(), ValidationFailure> {
        let Some(release_date) = movie.release_date else {
            return Ok(());
        };

        if release_date > ctx.today() {
            match movie.rating() {
                None => Ok(()),
                Some(rating) if rating.eq_ignore_ascii_case("none") => Ok(()),
                Some(_) => Err(ValidationFailure::new(UNPUBLISHED_RATING_MESSAGE)),
            }
        } else {
            match movie.rating() {
                Some(rating) if Self::is_published_rating(rating) => Ok(()),
                _ => Err(ValidationFailure::new(PUBLISHED_RATING_MESSAGE)),
            }
        }
    }
}
