use huzzah_shared::Location;
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::location_card::LocationCard;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::task::PageScope;

pub const FEATURED_COUNT: usize = 3;

/// The first few locations of the full listing.
pub fn featured(mut locations: Vec<Location>) -> Vec<Location> {
    locations.truncate(FEATURED_COUNT);
    locations
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let is_authenticated = auth.is_authenticated_signal();
    let featured_locations = RwSignal::new(Vec::<Location>::new());

    let client = auth.client();
    PageScope::new("home").spawn(async move {
        match client.locations().get_all().await {
            Ok(all) => featured_locations.set(featured(all)),
            Err(e) => log::error!("Error fetching featured locations: {e}"),
        }
    });

    view! {
        <div>
            <div class="hero bg-primary text-primary-content py-16">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <h1 class="text-5xl font-bold font-serif">"Welcome to Huzzah!"</h1>
                        <p class="py-6 text-xl">"Discover and review D&D locations from your adventures"</p>
                        <Show when=move || !is_authenticated.get()>
                            <button class="btn btn-secondary btn-lg" on:click=move |_| router.go(AppRoute::Register)>
                                "Join the Adventure"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>

            <div class="max-w-6xl mx-auto py-16 px-4">
                <h2 class="text-4xl font-bold font-serif text-center mb-8">"Featured Locations"</h2>
                <div class="grid gap-8 sm:grid-cols-2 md:grid-cols-3">
                    <For
                        each=move || featured_locations.get()
                        key=|location| location.id.clone()
                        children=|location| view! { <LocationCard location=location featured=true /> }
                    />
                </div>
            </div>
        </div>
    }
}
