//! Route pages
//!
//! Every page keeps the logic it can run without a DOM (filtering, submit
//! flows) in plain functions next to its component; those functions are what
//! the tests exercise.

pub mod create_location;
pub mod home;
pub mod location_details;
pub mod locations;
pub mod login;
pub mod profile;
pub mod register;

use leptos::prelude::*;

/// Read/write pair for one string field of a draft held in `draft`.
pub(crate) fn bind<D, G, S>(draft: RwSignal<D>, get: G, set: S) -> (Signal<String>, Callback<String>)
where
    D: Send + Sync + 'static,
    G: Fn(&D) -> String + Send + Sync + 'static,
    S: Fn(&mut D, String) + Send + Sync + 'static,
{
    let value = Signal::derive(move || draft.with(|d| get(d)));
    let on_input = Callback::new(move |next: String| draft.update(|d| set(d, next)));
    (value, on_input)
}
