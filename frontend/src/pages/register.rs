use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::auth::{AuthService, AuthState, use_auth};
use crate::components::alert::ErrorAlert;
use crate::components::form_field::TextField;
use crate::error::PageError;
use crate::forms::RegisterDraft;
use crate::pages::bind;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use crate::web::task::PageScope;

pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Validates the draft locally, then creates the account.
pub async fn register_account(
    service: &AuthService,
    draft: &RegisterDraft,
) -> Result<AuthState, PageError> {
    let input = draft.to_input()?;
    service
        .register(&input)
        .await
        .map_err(|e| PageError::request(REGISTER_FAILED, e))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = PageScope::new("register");
    let draft = RwSignal::new(RegisterDraft::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = draft.get_untracked();
        let service = auth.service();

        submitting.set(true);
        error.set(None);
        scope.spawn(async move {
            match register_account(&service, &form).await {
                Ok(session) => {
                    auth.set_session(session);
                    router.go(AppRoute::auth_success_redirect());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let (username, set_username) = bind(draft, |d| d.username.clone(), |d, v| d.username = v);
    let (email, set_email) = bind(draft, |d| d.email.clone(), |d, v| d.email = v);
    let (password, set_password) = bind(draft, |d| d.password.clone(), |d, v| d.password = v);
    let (confirm, set_confirm) = bind(draft, |d| d.confirm_password.clone(), |d, v| d.confirm_password = v);
    let (character_name, set_character_name) = bind(draft, |d| d.character_name.clone(), |d, v| d.character_name = v);
    let (character_class, set_character_class) = bind(draft, |d| d.character_class.clone(), |d, v| d.character_class = v);
    let (character_race, set_character_race) = bind(draft, |d| d.character_race.clone(), |d, v| d.character_race = v);

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-4xl font-bold font-serif">"Create Your Character"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error />
                        <TextField label="Username" value=username on_input=set_username required=true />
                        <TextField label="Email Address" value=email on_input=set_email input_type="email" required=true />
                        <TextField label="Password" value=password on_input=set_password input_type="password" required=true />
                        <TextField label="Confirm Password" value=confirm on_input=set_confirm input_type="password" required=true />
                        <TextField label="Character Name" value=character_name on_input=set_character_name required=true />
                        <TextField label="Character Class" value=character_class on_input=set_character_class required=true />
                        <TextField label="Character Race" value=character_race on_input=set_character_race required=true />
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                "Register"
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Already have an account? "
                            <Link to=AppRoute::Login.to_path() class="link link-primary">"Login"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{API, TestHarness, auth_response_json};
    use huzzah_shared::protocol::HttpMethod;
    use serde_json::json;

    fn draft() -> RegisterDraft {
        RegisterDraft {
            username: "caleb".into(),
            email: "caleb@example.com".into(),
            password: "frumpkin".into(),
            confirm_password: "frumpkin".into(),
            character_name: "Caleb".into(),
            character_class: "Wizard".into(),
            character_race: "Human".into(),
        }
    }

    #[tokio::test]
    async fn test_password_mismatch_makes_no_request() {
        let h = TestHarness::new();
        let mut mismatched = draft();
        mismatched.confirm_password = "frumpkim".into();

        let err = register_account(&AuthService::new(h.client.clone()), &mismatched)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Passwords do not match");
        assert!(h.transport.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_registration_body_omits_confirmation() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/register"),
            201,
            auth_response_json("fresh", "u2"),
        );

        let session = register_account(&AuthService::new(h.client.clone()), &draft())
            .await
            .unwrap();

        assert!(session.is_authenticated);
        let body: serde_json::Value =
            serde_json::from_str(h.transport.last_request().unwrap().body.as_deref().unwrap())
                .unwrap();
        assert_eq!(body["characterClass"], "Wizard");
        assert!(body.get("confirmPassword").is_none());
    }

    #[tokio::test]
    async fn test_rejected_registration_message() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/register"),
            400,
            json!({ "message": "User already exists" }),
        );

        let err = register_account(&AuthService::new(h.client.clone()), &draft())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), REGISTER_FAILED);
    }
}
