use crate::{
    AuthResponse, CreateLocationInput, CreateReviewInput, Location, LocationPatch, LocationType,
    LoginCredentials, RegisterInput, Review, ReviewPatch,
};
use serde::{Serialize, de::DeserializeOwned};
use url::form_urlencoded;

/// HTTP methods used by the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// Path relative to the API base URL, including any query string.
    fn path(&self) -> String;

    /// JSON request body, if the endpoint takes one.
    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        Ok(None)
    }

    /// Decodes a successful response body.
    fn parse_response(body: &str) -> Result<Self::Response, serde_json::Error> {
        serde_json::from_str(body)
    }
}

fn json_body<T: Serialize>(value: &T) -> Result<Option<String>, serde_json::Error> {
    serde_json::to_string(value).map(Some)
}

fn query(key: &str, value: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish()
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for RegisterInput {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/register".to_string()
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(self)
    }
}

impl ApiRequest for LoginCredentials {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(self)
    }
}

// =========================================================
// Locations
// =========================================================

/// Server-side narrowing for the location listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationQuery {
    #[default]
    All,
    Type(LocationType),
    World(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListLocationsRequest {
    pub query: LocationQuery,
}

impl ApiRequest for ListLocationsRequest {
    type Response = Vec<Location>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        match &self.query {
            LocationQuery::All => "/locations".to_string(),
            LocationQuery::Type(kind) => format!("/locations?{}", query("type", kind.as_str())),
            LocationQuery::World(world) => format!("/locations?{}", query("world", world)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetLocationRequest {
    pub id: String,
}

impl ApiRequest for GetLocationRequest {
    type Response = Location;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/locations/{}", self.id)
    }
}

impl ApiRequest for CreateLocationInput {
    type Response = Location;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/locations".to_string()
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateLocationRequest {
    pub id: String,
    pub patch: LocationPatch,
}

impl ApiRequest for UpdateLocationRequest {
    type Response = Location;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/locations/{}", self.id)
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(&self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteLocationRequest {
    pub id: String,
}

impl ApiRequest for DeleteLocationRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/locations/{}", self.id)
    }

    // The body of a delete is ignored
    fn parse_response(_body: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

// =========================================================
// Reviews
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLocationReviewsRequest {
    pub location_id: String,
}

impl ApiRequest for ListLocationReviewsRequest {
    type Response = Vec<Review>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/reviews/location/{}", self.location_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUserReviewsRequest {
    pub user_id: String,
}

impl ApiRequest for ListUserReviewsRequest {
    type Response = Vec<Review>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/reviews/user/{}", self.user_id)
    }
}

impl ApiRequest for CreateReviewInput {
    type Response = Review;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/reviews".to_string()
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReviewRequest {
    pub id: String,
    pub patch: ReviewPatch,
}

impl ApiRequest for UpdateReviewRequest {
    type Response = Review;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/reviews/{}", self.id)
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        json_body(&self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReviewRequest {
    pub id: String,
}

impl ApiRequest for DeleteReviewRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/reviews/{}", self.id)
    }

    fn parse_response(_body: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_paths() {
        assert_eq!(ListLocationsRequest::default().path(), "/locations");
        let by_type = ListLocationsRequest {
            query: LocationQuery::Type(LocationType::Temple),
        };
        assert_eq!(by_type.path(), "/locations?type=Temple");
    }

    #[test]
    fn test_world_query_is_encoded() {
        let by_world = ListLocationsRequest {
            query: LocationQuery::World("Forgotten Realms".into()),
        };
        assert_eq!(by_world.path(), "/locations?world=Forgotten+Realms");
    }

    #[test]
    fn test_delete_ignores_empty_body() {
        assert!(DeleteReviewRequest::parse_response("").is_ok());
        assert_eq!(DeleteLocationRequest::METHOD, HttpMethod::Delete);
    }

    #[test]
    fn test_update_body_is_the_patch() {
        let req = UpdateLocationRequest {
            id: "abc".into(),
            patch: LocationPatch {
                name: Some("Renamed".into()),
                ..Default::default()
            },
        };
        assert_eq!(req.path(), "/locations/abc");
        assert_eq!(req.body().unwrap().as_deref(), Some(r#"{"name":"Renamed"}"#));
    }

    #[test]
    fn test_login_body() {
        let creds = LoginCredentials {
            email: "a@b.c".into(),
            password: "pw".into(),
        };
        assert_eq!(
            creds.body().unwrap().as_deref(),
            Some(r#"{"email":"a@b.c","password":"pw"}"#)
        );
    }
}
