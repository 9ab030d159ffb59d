use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

/// Site header; links depend on the session.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let is_authenticated = auth.is_authenticated_signal();

    let on_logout = move |_| {
        auth.logout();
        router.go(AppRoute::Home);
    };

    view! {
        <div class="navbar bg-primary text-primary-content shadow-xl">
            <div class="flex-1">
                <Link to=AppRoute::Home.to_path() class="btn btn-ghost text-2xl font-serif">
                    "Huzzah!"
                </Link>
            </div>
            <div class="flex-none gap-2">
                <Link to=AppRoute::Locations.to_path() class="btn btn-ghost">
                    "Locations"
                </Link>
                <Show
                    when=move || is_authenticated.get()
                    fallback=|| view! {
                        <Link to=AppRoute::Login.to_path() class="btn btn-ghost">"Login"</Link>
                        <Link to=AppRoute::Register.to_path() class="btn btn-ghost">"Register"</Link>
                    }
                >
                    <Link to=AppRoute::CreateLocation.to_path() class="btn btn-ghost">
                        "Add Location"
                    </Link>
                    <Link to=AppRoute::Profile.to_path() class="btn btn-ghost">
                        "Profile"
                    </Link>
                    <button class="btn btn-outline btn-sm" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
