//! Shared fixtures for unit tests

use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::web::{KeyValueStore, MemoryStorage, MockTransport};

pub const API: &str = "http://test.local/api";

pub struct TestHarness {
    pub transport: Arc<MockTransport>,
    pub storage: Arc<MemoryStorage>,
    pub client: ApiClient,
}

impl TestHarness {
    pub fn new() -> Self {
        let transport = Arc::new(MockTransport::new());
        let storage = Arc::new(MemoryStorage::new());
        let client = ApiClient::new(
            &ClientConfig::with_base_url(API),
            transport.clone(),
            storage.clone(),
        );
        Self {
            transport,
            storage,
            client,
        }
    }

    pub fn stored_token(&self) -> Option<String> {
        self.storage.get("token")
    }
}

pub fn user_json(id: &str) -> Value {
    json!({
        "id": id,
        "username": format!("user-{id}"),
        "email": format!("{id}@example.com"),
        "characterName": "Vex",
        "characterClass": "Ranger",
        "characterRace": "Half-Elf"
    })
}

pub fn location_json(id: &str, kind: &str, world: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Location {id}"),
        "description": format!("Somewhere in {world}"),
        "type": kind,
        "world": world,
        "createdBy": user_json("owner"),
        "averageRating": 3.5,
        "createdAt": "2024-01-15T12:00:00.000Z"
    })
}

pub fn review_json(id: &str, location_id: &str, rating: u8) -> Value {
    json!({
        "id": id,
        "location": location_json(location_id, "Tavern", "Exandria"),
        "user": user_json("u1"),
        "rating": rating,
        "title": format!("Review {id}"),
        "content": "Cheap ale, loud bard.",
        "visitDate": "2024-02-01",
        "characterLevel": 5,
        "partySize": 4,
        "createdAt": "2024-02-02T08:30:00.000Z"
    })
}

pub fn auth_response_json(token: &str, user_id: &str) -> Value {
    json!({ "token": token, "user": user_json(user_id) })
}
