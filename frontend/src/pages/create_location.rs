use huzzah_shared::{Location, LocationType, WORLDS};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::{AuthState, use_auth};
use crate::components::alert::ErrorAlert;
use crate::components::form_field::{SelectField, TextField};
use crate::error::PageError;
use crate::forms::LocationDraft;
use crate::pages::bind;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::task::PageScope;

pub const CREATE_FAILED: &str = "Failed to create location";

pub async fn submit_location(
    client: &ApiClient,
    session: &AuthState,
    draft: &LocationDraft,
) -> Result<Location, PageError> {
    if !session.is_authenticated {
        return Err(PageError::LoginRequired {
            action: "create a location",
        });
    }
    let input = draft.to_input()?;

    let created = client
        .locations()
        .create(&input)
        .await
        .map_err(|e| PageError::request(CREATE_FAILED, e))?;
    log::info!("created location {} ({})", created.name, created.id);
    Ok(created)
}

#[component]
pub fn CreateLocationPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = PageScope::new("create location");
    let draft = RwSignal::new(LocationDraft::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let client = auth.client();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let session = auth.state.get_untracked();
        let form = draft.get_untracked();
        let client = client.clone();

        submitting.set(true);
        scope.spawn(async move {
            match submit_location(&client, &session, &form).await {
                Ok(_) => router.go(AppRoute::Locations),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let (name, set_name) = bind(draft, |d| d.name.clone(), |d, v| d.name = v);
    let (description, set_description) = bind(draft, |d| d.description.clone(), |d, v| d.description = v);
    let (kind, set_kind) = bind(draft, |d| d.kind.clone(), |d, v| d.kind = v);
    let (world, set_world) = bind(draft, |d| d.world.clone(), |d, v| d.world = v);
    let (coordinates, set_coordinates) = bind(draft, |d| d.coordinates.clone(), |d, v| d.coordinates = v);

    view! {
        <div class="max-w-2xl mx-auto py-8 px-4">
            <h1 class="text-4xl font-bold font-serif mb-6">"Add New Location"</h1>
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    <ErrorAlert message=error />
                    <TextField label="Location Name" value=name on_input=set_name required=true />
                    <TextField label="Description" value=description on_input=set_description multiline=true required=true />
                    <SelectField
                        label="Type"
                        value=kind
                        on_change=set_kind
                        options=LocationType::ALL.iter().map(ToString::to_string).collect()
                        placeholder="Choose a type"
                        required=true
                    />
                    <SelectField
                        label="World"
                        value=world
                        on_change=set_world
                        options=WORLDS.iter().map(ToString::to_string).collect()
                        placeholder="Choose a world"
                        required=true
                    />
                    <TextField
                        label="Coordinates (optional)"
                        value=coordinates
                        on_input=set_coordinates
                        hint="Format: latitude, longitude"
                    />
                    <div class="card-actions justify-end mt-4">
                        <button type="button" class="btn btn-ghost" on:click=move |_| router.go(AppRoute::Locations)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            "Create Location"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{API, TestHarness, location_json, user_json};
    use huzzah_shared::protocol::HttpMethod;
    use serde_json::{Value, json};

    fn draft(coordinates: &str) -> LocationDraft {
        LocationDraft {
            name: "Sharn".into(),
            description: "City of Towers".into(),
            kind: "City".into(),
            world: "Eberron".into(),
            coordinates: coordinates.into(),
        }
    }

    fn signed_in() -> AuthState {
        AuthState::signed_in(serde_json::from_value(user_json("u1")).unwrap())
    }

    fn posted_body(h: &TestHarness) -> Value {
        let request = h.transport.last_request().unwrap();
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_create_is_refused_locally() {
        let h = TestHarness::new();

        let err = submit_location(&h.client, &AuthState::default(), &draft(""))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "You must be logged in to create a location");
        assert!(h.transport.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_parsed_coordinates() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/locations"),
            201,
            location_json("new", "City", "Eberron"),
        );

        let created = submit_location(&h.client, &signed_in(), &draft("12.5, -3"))
            .await
            .unwrap();

        assert_eq!(created.id, "new");
        let body = posted_body(&h);
        assert_eq!(body["type"], "City");
        assert_eq!(body["coordinates"], json!({ "latitude": 12.5, "longitude": -3.0 }));
    }

    #[tokio::test]
    async fn test_malformed_coordinates_are_left_out() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/locations"),
            201,
            location_json("new", "City", "Eberron"),
        );

        submit_location(&h.client, &signed_in(), &draft("x, y, z"))
            .await
            .unwrap();

        assert!(posted_body(&h).get("coordinates").is_none());
    }

    #[tokio::test]
    async fn test_server_failure_message() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/locations"),
            500,
            json!({ "message": "Server error" }),
        );

        let err = submit_location(&h.client, &signed_in(), &draft(""))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), CREATE_FAILED);
    }
}
