use huzzah_shared::date::display_date;
use huzzah_shared::{Location, Review};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::{AuthState, use_auth};
use crate::components::alert::{ErrorAlert, Loading};
use crate::components::form_field::TextField;
use crate::components::rating::{RatingPicker, RatingStars};
use crate::error::{ClientResult, PageError};
use crate::forms::ReviewDraft;
use crate::pages::bind;
use crate::web::task::PageScope;

pub const LOAD_FAILED: &str = "Failed to load location details";
pub const SUBMIT_FAILED: &str = "Failed to submit review";

/// Fetches the location, then its reviews.
pub async fn load_location(client: &ApiClient, id: &str) -> ClientResult<(Location, Vec<Review>)> {
    let location = client.locations().get_by_id(id).await?;
    let reviews = client.reviews().get_by_location(id).await?;
    Ok((location, reviews))
}

/// Posts a review and returns the refreshed review list for `location`.
///
/// An anonymous session fails before any request is made.
pub async fn submit_review(
    client: &ApiClient,
    session: &AuthState,
    location: &Location,
    draft: &ReviewDraft,
) -> Result<Vec<Review>, PageError> {
    if !session.is_authenticated {
        return Err(PageError::LoginRequired {
            action: "leave a review",
        });
    }
    let input = draft.to_input(location)?;

    client
        .reviews()
        .create(&input)
        .await
        .map_err(|e| PageError::request(SUBMIT_FAILED, e))?;
    client
        .reviews()
        .get_by_location(&location.id)
        .await
        .map_err(|e| PageError::request(SUBMIT_FAILED, e))
}

#[component]
pub fn LocationDetailsPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let scope = PageScope::new("location details");
    let location = RwSignal::new(None::<Location>);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let error = RwSignal::new(None::<String>);
    let draft = RwSignal::new(ReviewDraft::default());
    let submitting = RwSignal::new(false);

    let client = auth.client();
    {
        let client = client.clone();
        scope.spawn(async move {
            match load_location(&client, &id).await {
                Ok((loaded, list)) => {
                    location.set(Some(loaded));
                    reviews.set(list);
                }
                Err(e) => {
                    log::error!("Error fetching location details: {e}");
                    error.set(Some(LOAD_FAILED.to_string()));
                }
            }
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(current) = location.get_untracked() else {
            return;
        };
        let session = auth.state.get_untracked();
        let form = draft.get_untracked();
        let client = client.clone();

        submitting.set(true);
        scope.spawn(async move {
            match submit_review(&client, &session, &current, &form).await {
                Ok(list) => {
                    reviews.set(list);
                    draft.set(ReviewDraft::default());
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    let (title, set_title) = bind(draft, |d| d.title.clone(), |d, v| d.title = v);
    let (content, set_content) = bind(draft, |d| d.content.clone(), |d, v| d.content = v);
    let (visit_date, set_visit_date) = bind(draft, |d| d.visit_date.clone(), |d, v| d.visit_date = v);
    let (level, set_level) = bind(draft, |d| d.character_level.clone(), |d, v| d.character_level = v);
    let (party, set_party) = bind(draft, |d| d.party_size.clone(), |d, v| d.party_size = v);
    let rating = Signal::derive(move || draft.with(|d| d.rating));
    let set_rating = Callback::new(move |value: u8| draft.update(|d| d.rating = value));

    let header = move || {
        location.get().map(|loc| {
            let review_count = reviews.with(Vec::len);
            let summary = format!("({} based on {review_count} reviews)", loc.rating_label());
            let coordinates = loc.coordinates.map(|c| {
                view! {
                    <p class="text-sm text-base-content/70">
                        {format!("Coordinates: {}, {}", c.latitude, c.longitude)}
                    </p>
                }
            });
            view! {
                <div class="card bg-base-100 shadow-xl">
                    <figure class="h-96 overflow-hidden">
                        <img src=loc.image_url() alt=loc.name.clone() class="w-full object-cover" />
                    </figure>
                    <div class="card-body">
                        <h1 class="text-4xl font-bold font-serif">{loc.name.clone()}</h1>
                        <div class="flex gap-2">
                            <span class="badge badge-primary">{loc.kind.to_string()}</span>
                            <span class="badge badge-outline">{loc.world.clone()}</span>
                        </div>
                        <p>{loc.description.clone()}</p>
                        <div class="flex items-center gap-2">
                            <RatingStars value=loc.average_rating />
                            <span class="text-sm text-base-content/70">{summary}</span>
                        </div>
                        {coordinates}
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="max-w-6xl mx-auto py-8 px-4">
            <Show
                when=move || location.with(Option::is_some)
                fallback=move || view! {
                    <ErrorAlert message=error />
                    <Show when=move || error.with(Option::is_none)>
                        <Loading />
                    </Show>
                }
            >
                <div class="grid gap-6 md:grid-cols-3">
                    <div class="md:col-span-3">{header}</div>

                    <div class="md:col-span-2 space-y-4">
                        <h2 class="text-2xl font-bold">"Reviews"</h2>
                        <For
                            each=move || reviews.get()
                            key=|review| review.id.clone()
                            children=|review| view! { <ReviewCard review=review /> }
                        />
                    </div>

                    <div class="card bg-base-100 shadow-xl h-fit">
                        <form class="card-body" on:submit=on_submit.clone()>
                            <h2 class="card-title">"Leave a Review"</h2>
                            <ErrorAlert message=error />
                            <div class="form-control">
                                <span class="label-text">"Rating"</span>
                                <RatingPicker value=rating on_change=set_rating />
                            </div>
                            <TextField label="Title" value=title on_input=set_title required=true />
                            <TextField label="Review" value=content on_input=set_content multiline=true required=true />
                            <TextField label="Visit Date" value=visit_date on_input=set_visit_date input_type="date" required=true />
                            <TextField label="Character Level" value=level on_input=set_level input_type="number" required=true />
                            <TextField label="Party Size" value=party on_input=set_party input_type="number" required=true />
                            <button type="submit" class="btn btn-primary w-full mt-4" disabled=move || submitting.get()>
                                "Submit Review"
                            </button>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let byline = format!(
        "By {} ({}) on {}",
        review.user.username,
        review.user.character_name,
        display_date(&review.visit_date)
    );
    let party = format!(
        "Level {} | Party Size: {}",
        review.character_level, review.party_size
    );

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title">{review.title}</h3>
                    <RatingStars value=f64::from(review.rating) />
                </div>
                <p class="text-sm text-base-content/70">{byline}</p>
                <p class="text-sm text-base-content/70">{party}</p>
                <p>{review.content}</p>
            </div>
        </div>
    }
}
