use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::auth::{AuthService, AuthState, use_auth};
use crate::components::alert::ErrorAlert;
use crate::components::form_field::TextField;
use crate::error::PageError;
use crate::forms::LoginDraft;
use crate::pages::bind;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use crate::web::task::PageScope;

pub const LOGIN_FAILED: &str = "Failed to login. Please check your credentials.";

pub async fn sign_in(service: &AuthService, draft: &LoginDraft) -> Result<AuthState, PageError> {
    let credentials = draft.to_credentials()?;
    service
        .login(&credentials)
        .await
        .map_err(|e| PageError::request(LOGIN_FAILED, e))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = PageScope::new("login");
    let draft = RwSignal::new(LoginDraft::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = draft.get_untracked();
        let service = auth.service();

        submitting.set(true);
        error.set(None);
        scope.spawn(async move {
            match sign_in(&service, &form).await {
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

    let (email, set_email) = bind(draft, |d| d.email.clone(), |d, v| d.email = v);
    let (password, set_password) = bind(draft, |d| d.password.clone(), |d, v| d.password = v);

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-4xl font-bold font-serif">"Login"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error />
                        <TextField label="Email Address" value=email on_input=set_email input_type="email" required=true />
                        <TextField label="Password" value=password on_input=set_password input_type="password" required=true />
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "New adventurer? "
                            <Link to=AppRoute::Register.to_path() class="link link-primary">"Register"</Link>
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

    fn draft() -> LoginDraft {
        LoginDraft {
            email: "u1@example.com".into(),
            password: "hunter2".into(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_returns_session() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/login"),
            200,
            auth_response_json("jwt", "u1"),
        );

        let session = sign_in(&AuthService::new(h.client.clone()), &draft())
            .await
            .unwrap();

        assert!(session.is_authenticated);
        assert_eq!(h.stored_token().as_deref(), Some("jwt"));
    }

    #[tokio::test]
    async fn test_bad_credentials_message() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/login"),
            401,
            json!({ "message": "Invalid credentials" }),
        );

        let err = sign_in(&AuthService::new(h.client.clone()), &draft())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), LOGIN_FAILED);
        assert_eq!(h.stored_token(), None);
    }
}
