use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationError};

use super::review::Review;

/// Movie genres.
///
/// The legacy numeric codes collide: `Family` and `Romance` both map to 7.
/// Codes are only used at the boundary; storage and JSON use the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "GenreRepr")]
pub enum Genre {
    #[default]
    Unassigned,
    SciFi,
    Mystery,
    Documentary,
    Horror,
    Drama,
    Comedy,
    Family,
    Romance,
    Vintage,
    Western,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenreError {
    #[error("Genre code {0} is shared by Family and Romance and cannot be resolved")]
    AmbiguousCode(i32),

    #[error("Unknown genre code: {0}")]
    UnknownCode(i32),

    #[error("Unknown genre: {0}")]
    UnknownName(String),
}

impl Genre {
    pub const ALL: [Self; 11] = [
        Self::Unassigned,
        Self::SciFi,
        Self::Mystery,
        Self::Documentary,
        Self::Horror,
        Self::Drama,
        Self::Comedy,
        Self::Family,
        Self::Romance,
        Self::Vintage,
        Self::Western,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unassigned => "Unassigned",
            Self::SciFi => "SciFi",
            Self::Mystery => "Mystery",
            Self::Documentary => "Documentary",
            Self::Horror => "Horror",
            Self::Drama => "Drama",
            Self::Comedy => "Comedy",
            Self::Family => "Family",
            Self::Romance => "Romance",
            Self::Vintage => "Vintage",
            Self::Western => "Western",
        }
    }

    /// Legacy integer code. `Family` and `Romance` both return 7.
    #[must_use]
    pub const fn legacy_code(self) -> i32 {
        match self {
            Self::Unassigned => 0,
            Self::SciFi => 1,
            Self::Mystery => 2,
            Self::Documentary => 3,
            Self::Horror => 4,
            Self::Drama => 5,
            Self::Comedy => 6,
            Self::Family | Self::Romance => 7,
            Self::Vintage => 8,
            Self::Western => 9,
        }
    }

    pub fn from_legacy_code(code: i32) -> Result<Self, GenreError> {
        let matches: Vec<Self> = Self::ALL
            .into_iter()
            .filter(|g| g.legacy_code() == code)
            .collect();

        match matches.as_slice() {
            [single] => Ok(*single),
            [] => Err(GenreError::UnknownCode(code)),
            _ => Err(GenreError::AmbiguousCode(code)),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = GenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GenreError::UnknownName(trimmed.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GenreRepr {
    Name(String),
    Code(i32),
}

impl TryFrom<GenreRepr> for Genre {
    type Error = GenreError;

    fn try_from(value: GenreRepr) -> Result<Self, Self::Error> {
        match value {
            GenreRepr::Name(name) => name.parse(),
            GenreRepr::Code(code) => Self::from_legacy_code(code),
        }
    }
}

/// A stored movie together with its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_date: NaiveDate,
    pub description: String,
    pub price: f64,
    pub genre: Genre,
    pub rating: Option<String>,
    pub audience: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Empty and whitespace-only text counts as missing.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}

/// Body of a create or update request. Updates replace the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct MovieInput {
    #[validate(
        required(message = "The title field is required."),
        custom(function = "not_blank", message = "The title field is required."),
        length(
            max = 100,
            message = "The title must be between 1 and 100 characters in length."
        )
    )]
    pub title: Option<String>,

    #[validate(required(message = "The release date field is required."))]
    pub release_date: Option<NaiveDate>,

    #[validate(
        required(message = "The description field is required."),
        custom(function = "not_blank", message = "The description field is required."),
        length(
            max = 1000,
            message = "The description must be between 1 and 1000 characters in length."
        )
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "The price field is required."),
        range(min = 0.0, max = 999.99, message = "The price must be between 0 and 999.99.")
    )]
    pub price: Option<f64>,

    #[validate(required(message = "The genre field is required."))]
    pub genre: Option<Genre>,

    #[serde(default)]
    pub rating: Option<String>,

    /// Intended audience supplied by the client, e.g. `"G"`.
    #[serde(default)]
    pub audience: Option<String>,
}

impl MovieInput {
    /// Rating with empty strings treated as absent.
    #[must_use]
    pub fn rating(&self) -> Option<&str> {
        self.rating.as_deref().filter(|r| !r.is_empty())
    }

    #[must_use]
    pub fn audience(&self) -> Option<&str> {
        self.audience.as_deref().filter(|a| !a.is_empty())
    }

    /// Converts a validated input into concrete column values.
    ///
    /// Returns `None` if a required field is still missing.
    #[must_use]
    pub fn into_fields(self) -> Option<MovieFields> {
        let rating = self.rating().map(ToString::to_string);
        let audience = self.audience().map(ToString::to_string);

        Some(MovieFields {
            title: self.title?,
            release_date: self.release_date?,
            description: self.description?,
            price: self.price?,
            genre: self.genre?,
            rating,
            audience,
        })
    }
}

/// Column values of a movie that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFields {
    pub title: String,
    pub release_date: NaiveDate,
    pub description: String,
    pub price: f64,
    pub genre: Genre,
    pub rating: Option<String>,
    pub audience: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_codes() {
        assert_eq!(Genre::from_legacy_code(0), Ok(Genre::Unassigned));
        assert_eq!(Genre::from_legacy_code(6), Ok(Genre::Comedy));
        assert_eq!(Genre::from_legacy_code(8), Ok(Genre::Vintage));
        assert_eq!(Genre::from_legacy_code(9), Ok(Genre::Western));
        assert_eq!(Genre::Family.legacy_code(), Genre::Romance.legacy_code());
        assert_eq!(
            Genre::from_legacy_code(7),
            Err(GenreError::AmbiguousCode(7))
        );
        assert_eq!(
            Genre::from_legacy_code(42),
            Err(GenreError::UnknownCode(42))
        );
    }

    #[test]
    fn test_genre_parse() {
        assert_eq!("scifi".parse::<Genre>(), Ok(Genre::SciFi));
        assert_eq!(" Family ".parse::<Genre>(), Ok(Genre::Family));
        assert!("Anime".parse::<Genre>().is_err());
    }

    #[test]
    fn test_genre_deserialize() {
        let genre: Genre = serde_json::from_str("\"Vintage\"").unwrap();
        assert_eq!(genre, Genre::Vintage);

        let genre: Genre = serde_json::from_str("3").unwrap();
        assert_eq!(genre, Genre::Documentary);

        assert!(serde_json::from_str::<Genre>("7").is_err());
        assert_eq!(serde_json::to_string(&Genre::SciFi).unwrap(), "\"SciFi\"");
    }

    #[test]
    fn test_into_fields_drops_empty_rating() {
        let input = MovieInput {
            title: Some("Heat".to_string()),
            release_date: NaiveDate::from_ymd_opt(1995, 12, 15),
            description: Some("Crime".to_string()),
            price: Some(9.99),
            genre: Some(Genre::Drama),
            rating: Some(String::new()),
            audience: None,
        };

        let fields = input.into_fields().unwrap();
        assert_eq!(fields.rating, None);
        assert_eq!(fields.genre, Genre::Drama);
    }

    #[test]
    fn test_into_fields_requires_date() {
        let input = MovieInput {
            title: Some("Heat".to_string()),
            price: Some(1.0),
            genre: Some(Genre::Drama),
            ..Default::default()
        };
        assert!(input.into_fields().is_none());
    }
}
