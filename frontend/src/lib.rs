//! Huzzah! front-end
//!
//! Layers, bottom up:
//! - `web`: browser adapters (fetch, localStorage, History API, page tasks)
//! - `api`: typed REST client over an injected transport
//! - `auth`: session store provided through context
//! - `forms`: form drafts and local validation
//! - `components`, `pages`: the UI

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod pages;
pub mod web;

#[cfg(test)]
mod test_support;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::{AuthContext, AuthService};
use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::pages::create_location::CreateLocationPage;
use crate::pages::home::HomePage;
use crate::pages::location_details::LocationDetailsPage;
use crate::pages::locations::LocationsPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        // NotFound never reaches the outlet; the router redirects it home
        AppRoute::Home | AppRoute::NotFound => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Locations => view! { <LocationsPage /> }.into_any(),
        AppRoute::CreateLocation => view! { <CreateLocationPage /> }.into_any(),
        AppRoute::LocationDetails(id) => view! { <LocationDetailsPage id=id /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    log::info!("using API at {}", config.api_base_url);

    let auth_ctx = AuthContext::new(AuthService::new(ApiClient::browser(&config)));
    provide_context(auth_ctx);
    auth_ctx.init();

    let signed_in = auth_ctx.has_profile_signal();

    view! {
        <Router signed_in=signed_in>
            <Navbar />
            <main class="min-h-screen bg-base-200">
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
