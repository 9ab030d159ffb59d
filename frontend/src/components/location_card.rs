use huzzah_shared::Location;
use leptos::prelude::*;

use crate::components::rating::RatingStars;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Clickable summary card linking to the location's page.
///
/// `featured` cards show a stock photo for the type instead of the upload.
#[component]
pub fn LocationCard(location: Location, #[prop(optional)] featured: bool) -> impl IntoView {
    let router = use_router();
    let target = AppRoute::LocationDetails(location.id.clone());
    let rating = location.average_rating;
    let image = if featured {
        location.featured_image_url()
    } else {
        location.image_url()
    };

    view! {
        <div
            class="card bg-base-100 shadow-xl h-full cursor-pointer hover:shadow-2xl transition-shadow"
            on:click=move |_| router.go(target.clone())
        >
            <figure class="h-48 overflow-hidden">
                <img src=image alt=location.name.clone() class="w-full object-cover" />
            </figure>
            <div class="card-body">
                <h3 class="card-title">{location.name.clone()}</h3>
                <p class="text-sm text-base-content/70">
                    {format!("{} • {}", location.kind, location.world)}
                </p>
                <div class="flex items-center gap-2">
                    <RatingStars value=rating />
                    <span class="text-sm text-base-content/70">
                        {format!("{}/5", location.rating_label())}
                    </span>
                </div>
            </div>
        </div>
    }
}
