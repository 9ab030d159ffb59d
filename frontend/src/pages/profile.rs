use huzzah_shared::date::display_date;
use huzzah_shared::{Review, User};
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::components::rating::RatingStars;
use crate::error::PageError;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use crate::web::task::PageScope;

pub const REVIEWS_FAILED: &str = "Failed to load reviews";

pub async fn load_user_reviews(client: &ApiClient, user: &User) -> Result<Vec<Review>, PageError> {
    client
        .reviews()
        .get_by_user(&user.id)
        .await
        .map_err(|e| PageError::request(REVIEWS_FAILED, e))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let scope = PageScope::new("profile");
    let reviews = RwSignal::new(Vec::<Review>::new());
    let error = RwSignal::new(None::<String>);
    let user = Memo::new(move |_| auth.state.with(|s| s.user.clone()));
    let is_authenticated = auth.is_authenticated_signal();

    let client = auth.client();
    Effect::new(move |_| {
        let Some(current) = user.get() else {
            return;
        };
        let client = client.clone();
        scope.spawn(async move {
            match load_user_reviews(&client, &current).await {
                Ok(list) => reviews.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let anonymous = move || {
        view! {
            <div class="max-w-2xl mx-auto py-16 px-4 text-center space-y-4">
                <Show
                    when=move || is_authenticated.get()
                    fallback=|| view! { <p>"Please log in to view your profile"</p> }
                >
                    <p>"Your character details are not cached in this tab. Log in again to see them."</p>
                </Show>
                <Link to=AppRoute::Login.to_path() class="btn btn-primary">"Login"</Link>
            </div>
        }
    };

    view! {
        <Show when=move || user.with(Option::is_some) fallback=anonymous>
            {move || user.get().map(|u| view! {
                <div class="max-w-6xl mx-auto py-8 px-4 grid gap-6 md:grid-cols-3">
                    <div class="card bg-base-100 shadow-xl h-fit">
                        <div class="card-body">
                            <h2 class="card-title font-serif text-2xl">"Character Profile"</h2>
                            <ErrorAlert message=error />
                            <p><strong>"Username: "</strong>{u.username}</p>
                            <p><strong>"Character Name: "</strong>{u.character_name}</p>
                            <p><strong>"Class: "</strong>{u.character_class}</p>
                            <p><strong>"Race: "</strong>{u.character_race}</p>
                        </div>
                    </div>
                    <div class="md:col-span-2 space-y-4">
                        <h2 class="text-2xl font-bold">"My Reviews"</h2>
                        <Show
                            when=move || reviews.with(|r| !r.is_empty())
                            fallback=|| view! { <p class="text-base-content/50">"No reviews yet."</p> }
                        >
                            <For
                                each=move || reviews.get()
                                key=|review| review.id.clone()
                                children=|review| view! { <ProfileReview review=review /> }
                            />
                        </Show>
                    </div>
                </div>
            })}
        </Show>
    }
}

#[component]
fn ProfileReview(review: Review) -> impl IntoView {
    let target = AppRoute::LocationDetails(review.location.id.clone()).to_path();
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title">{review.title}</h3>
                    <RatingStars value=f64::from(review.rating) />
                </div>
                <Link to=target class="link link-primary text-sm">{review.location.name}</Link>
                <p class="text-sm text-base-content/70">
                    {format!("Visited on {}", display_date(&review.visit_date))}
                </p>
                <p>{review.content}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{API, TestHarness, review_json, user_json};
    use huzzah_shared::protocol::HttpMethod;
    use serde_json::json;

    fn user() -> User {
        serde_json::from_value(user_json("u1")).unwrap()
    }

    #[tokio::test]
    async fn test_reviews_fetched_for_user() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Get,
            &format!("{API}/reviews/user/u1"),
            200,
            json!([review_json("r1", "l1", 4), review_json("r2", "l2", 1)]),
        );

        let reviews = load_user_reviews(&h.client, &user()).await.unwrap();

        let ids: Vec<_> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2"]);
    }

    #[tokio::test]
    async fn test_failure_message() {
        let h = TestHarness::new();

        let err = load_user_reviews(&h.client, &user()).await.unwrap_err();

        assert_eq!(err.to_string(), REVIEWS_FAILED);
    }
}
