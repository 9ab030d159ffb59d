//! Form drafts
//!
//! Each form keeps its raw input in a draft struct (held in one `RwSignal` by
//! the page). Converting a draft into an API input is where local validation
//! happens.

use huzzah_shared::{
    Coordinates, CreateLocationInput, CreateReviewInput, Location, LocationType, LoginCredentials,
    MAX_RATING, RegisterInput,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
    #[error("Rating must be between 0 and 5")]
    RatingOutOfRange,
    #[error("Please choose a location type")]
    UnknownLocationType,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn whole_number(value: &str, field: &'static str) -> Result<u32, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber(field))
}

/// Parses a `"latitude,longitude"` string.
///
/// Blank input and anything that is not exactly two finite decimals yields
/// `None`: malformed coordinates are dropped, never sent as NaN.
pub fn parse_coordinates(raw: &str) -> Option<Coordinates> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let mut parts = raw.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        log::warn!("ignoring coordinates {raw:?}: expected \"lat,lon\"");
        return None;
    };

    match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
        (Ok(latitude), Ok(longitude)) if latitude.is_finite() && longitude.is_finite() => {
            Some(Coordinates {
                latitude,
                longitude,
            })
        }
        _ => {
            log::warn!("ignoring coordinates {raw:?}: not numeric");
            None
        }
    }
}

// =========================================================
// Auth forms
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn to_credentials(&self) -> Result<LoginCredentials, FormError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }
        Ok(LoginCredentials {
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub character_name: String,
    pub character_class: String,
    pub character_race: String,
}

impl RegisterDraft {
    pub fn to_input(&self) -> Result<RegisterInput, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }
        Ok(RegisterInput {
            username: required(&self.username, "Username")?,
            email: required(&self.email, "Email")?,
            password: self.password.clone(),
            character_name: required(&self.character_name, "Character name")?,
            character_class: required(&self.character_class, "Character class")?,
            character_race: required(&self.character_race, "Character race")?,
        })
    }
}

// =========================================================
// Location form
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationDraft {
    pub name: String,
    pub description: String,
    /// Raw select value, empty until chosen
    pub kind: String,
    pub world: String,
    pub coordinates: String,
}

impl LocationDraft {
    pub fn to_input(&self) -> Result<CreateLocationInput, FormError> {
        let name = required(&self.name, "Name")?;
        let description = required(&self.description, "Description")?;
        let kind: LocationType = self
            .kind
            .parse()
            .map_err(|_| FormError::UnknownLocationType)?;
        let world = required(&self.world, "World")?;

        Ok(CreateLocationInput {
            name,
            description,
            kind,
            coordinates: parse_coordinates(&self.coordinates),
            world,
        })
    }
}

// =========================================================
// Review form
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub visit_date: String,
    pub character_level: String,
    pub party_size: String,
}

impl ReviewDraft {
    pub fn to_input(&self, location: &Location) -> Result<CreateReviewInput, FormError> {
        if self.rating > MAX_RATING {
            return Err(FormError::RatingOutOfRange);
        }
        Ok(CreateReviewInput {
            location: location.clone(),
            rating: self.rating,
            title: required(&self.title, "Title")?,
            content: required(&self.content, "Review")?,
            visit_date: required(&self.visit_date, "Visit date")?,
            character_level: whole_number(&self.character_level, "Character level")?,
            party_size: whole_number(&self.party_size, "Party size")?,
        })
    }
}
