use huzzah_shared::protocol::{
    ApiRequest, DeleteLocationRequest, DeleteReviewRequest, GetLocationRequest,
    ListLocationReviewsRequest, ListLocationsRequest, ListUserReviewsRequest, LocationQuery,
    UpdateLocationRequest, UpdateReviewRequest,
};
use huzzah_shared::{
    AuthResponse, CONTENT_TYPE_JSON, CreateLocationInput, CreateReviewInput, HEADER_AUTHORIZATION,
    HEADER_CONTENT_TYPE, Location, LocationPatch, LocationType, LoginCredentials, RegisterInput,
    Review, ReviewPatch,
};
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::web::{BrowserStorage, FetchTransport, HttpRequest, HttpTransport, KeyValueStore, TokenStore};

/// Single point of egress to the REST API.
///
/// Cheap to clone; all clones share the transport and token store.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn HttpTransport>,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn HttpTransport>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            base_url: Arc::from(config.api_base_url.trim_end_matches('/')),
            transport,
            tokens: TokenStore::new(storage, config.token_key),
        }
    }

    /// `fetch` + `localStorage`
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(config, Arc::new(FetchTransport), Arc::new(BrowserStorage))
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends one endpoint request.
    ///
    /// The token is read from storage here, on every call. Non-2xx answers
    /// fail with [`ClientError::Status`]; nothing is retried.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> ClientResult<R::Response> {
        let url = self.url(&request.path());
        let mut http = HttpRequest::new(&url, R::METHOD)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);

        if let Some(token) = self.tokens.get() {
            http = http.with_header(HEADER_AUTHORIZATION, &format!("Bearer {token}"));
        }
        if let Some(body) = request.body().map_err(ClientError::Encode)? {
            http = http.with_body(body);
        }

        log::debug!("{} {}", R::METHOD.as_str(), url);
        let response = self.transport.send(http).await?;

        if !response.ok() {
            log::warn!("{} {} -> {}", R::METHOD.as_str(), url, response.status);
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }

        R::parse_response(&response.body).map_err(ClientError::Decode)
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn locations(&self) -> LocationsApi<'_> {
        LocationsApi { client: self }
    }

    pub fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi { client: self }
    }
}

// =========================================================
// Resource wrappers
// =========================================================

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl AuthApi<'_> {
    pub async fn register(&self, input: &RegisterInput) -> ClientResult<AuthResponse> {
        self.client.send(input).await
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<AuthResponse> {
        self.client.send(credentials).await
    }
}

pub struct LocationsApi<'a> {
    client: &'a ApiClient,
}

impl LocationsApi<'_> {
    pub async fn get_all(&self) -> ClientResult<Vec<Location>> {
        self.client.send(&ListLocationsRequest::default()).await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Location> {
        self.client
            .send(&GetLocationRequest { id: id.to_string() })
            .await
    }

    pub async fn get_by_type(&self, kind: LocationType) -> ClientResult<Vec<Location>> {
        self.client
            .send(&ListLocationsRequest {
                query: LocationQuery::Type(kind),
            })
            .await
    }

    pub async fn get_by_world(&self, world: &str) -> ClientResult<Vec<Location>> {
        self.client
            .send(&ListLocationsRequest {
                query: LocationQuery::World(world.to_string()),
            })
            .await
    }

    pub async fn create(&self, input: &CreateLocationInput) -> ClientResult<Location> {
        self.client.send(input).await
    }

    pub async fn update(&self, id: &str, patch: LocationPatch) -> ClientResult<Location> {
        self.client
            .send(&UpdateLocationRequest {
                id: id.to_string(),
                patch,
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .send(&DeleteLocationRequest { id: id.to_string() })
            .await
    }
}

pub struct ReviewsApi<'a> {
    client: &'a ApiClient,
}

impl ReviewsApi<'_> {
    pub async fn get_by_location(&self, location_id: &str) -> ClientResult<Vec<Review>> {
        self.client
            .send(&ListLocationReviewsRequest {
                location_id: location_id.to_string(),
            })
            .await
    }

    pub async fn get_by_user(&self, user_id: &str) -> ClientResult<Vec<Review>> {
        self.client
            .send(&ListUserReviewsRequest {
                user_id: user_id.to_string(),
            })
            .await
    }

    pub async fn create(&self, input: &CreateReviewInput) -> ClientResult<Review> {
        self.client.send(input).await
    }

    pub async fn update(&self, id: &str, patch: ReviewPatch) -> ClientResult<Review> {
        self.client
            .send(&UpdateReviewRequest {
                id: id.to_string(),
                patch,
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .send(&DeleteReviewRequest { id: id.to_string() })
            .await
    }
}
