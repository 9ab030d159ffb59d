use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod date;
pub mod protocol;

// =========================================================
// Constants
// =========================================================

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Worlds offered by the location forms and filters.
pub const WORLDS: [&str; 5] = ["Forgotten Realms", "Eberron", "Ravnica", "Exandria", "Custom"];

pub const MAX_RATING: u8 = 5;

/// Served alongside the bundle; shown when a location has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-location.jpg";

// =========================================================
// Domain Models
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub character_name: String,
    pub character_class: String,
    pub character_race: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    Tavern,
    Dungeon,
    Castle,
    Temple,
    City,
    Wilderness,
}

impl LocationType {
    pub const ALL: [LocationType; 6] = [
        LocationType::Tavern,
        LocationType::Dungeon,
        LocationType::Castle,
        LocationType::Temple,
        LocationType::City,
        LocationType::Wilderness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Tavern => "Tavern",
            LocationType::Dungeon => "Dungeon",
            LocationType::Castle => "Castle",
            LocationType::Temple => "Temple",
            LocationType::City => "City",
            LocationType::Wilderness => "Wilderness",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocationType(pub String);

impl fmt::Display for UnknownLocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown location type: {}", self.0)
    }
}

impl std::error::Error for UnknownLocationType {}

impl FromStr for LocationType {
    type Err = UnknownLocationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownLocationType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub world: String,
    pub created_by: User,
    pub average_rating: f64,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Location {
    /// Uploaded image, or the static placeholder.
    pub fn image_url(&self) -> String {
        match &self.image {
            Some(image) if !image.is_empty() => image.clone(),
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Stock photo keyed by location type, used for the home page showcase.
    pub fn featured_image_url(&self) -> String {
        format!(
            "https://source.unsplash.com/random/400x300/?{}",
            self.kind.as_str().to_lowercase()
        )
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub location: Location,
    pub user: User,
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub visit_date: String,
    pub character_level: u32,
    pub party_size: u32,
    pub created_at: String,
}

// =========================================================
// Inputs
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub character_name: String,
    pub character_class: String,
    pub character_race: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLocationInput {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub world: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewInput {
    pub location: Location,
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub visit_date: String,
    pub character_level: u32,
    pub party_size: u32,
}

/// Partial location update; unset fields are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<LocationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial review update; unset fields are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u32>,
}

// =========================================================
// Responses
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
}

/// Error body returned by the API on rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}
