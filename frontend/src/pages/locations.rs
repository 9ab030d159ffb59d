use huzzah_shared::{Location, LocationType, WORLDS};
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::alert::Loading;
use crate::components::form_field::{SelectField, TextField};
use crate::components::location_card::LocationCard;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use crate::web::task::PageScope;

/// Client-side filter over the full listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    /// Case-insensitive substring of name or description
    pub search: String,
    pub kind: Option<LocationType>,
    pub world: Option<String>,
}

impl LocationFilter {
    pub fn matches(&self, location: &Location) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || location.name.to_lowercase().contains(&needle)
            || location.description.to_lowercase().contains(&needle);
        let kind_ok = self.kind.is_none_or(|kind| location.kind == kind);
        let world_ok = self.world.as_deref().is_none_or(|world| location.world == world);

        text_ok && kind_ok && world_ok
    }

    /// Matching locations, in listing order.
    pub fn apply(&self, locations: &[Location]) -> Vec<Location> {
        locations
            .iter()
            .filter(|location| self.matches(location))
            .cloned()
            .collect()
    }

    /// Updates the type from a select value; `""` or anything unknown clears it.
    pub fn set_kind(&mut self, raw: &str) {
        self.kind = raw.parse().ok();
    }

    pub fn set_world(&mut self, raw: &str) {
        self.world = (!raw.is_empty()).then(|| raw.to_string());
    }
}

#[component]
pub fn LocationsPage() -> impl IntoView {
    let auth = use_auth();
    let locations = RwSignal::new(Vec::<Location>::new());
    let loaded = RwSignal::new(false);
    let filter = RwSignal::new(LocationFilter::default());

    let client = auth.client();
    PageScope::new("locations").spawn(async move {
        match client.locations().get_all().await {
            Ok(all) => locations.set(all),
            Err(e) => log::error!("Error fetching locations: {e}"),
        }
        loaded.set(true);
    });

    let visible = Memo::new(move |_| filter.with(|f| locations.with(|all| f.apply(all))));

    let search = Signal::derive(move || filter.with(|f| f.search.clone()));
    let kind = Signal::derive(move || {
        filter.with(|f| f.kind.map(|k| k.as_str().to_string()).unwrap_or_default())
    });
    let world = Signal::derive(move || filter.with(|f| f.world.clone().unwrap_or_default()));

    view! {
        <div class="max-w-6xl mx-auto py-8 px-4">
            <h1 class="text-4xl font-bold font-serif mb-6">"Discover Locations"</h1>

            <div class="grid gap-4 md:grid-cols-4 items-end mb-8">
                <TextField
                    label="Search Locations"
                    value=search
                    on_input=Callback::new(move |v: String| filter.update(|f| f.search = v))
                />
                <SelectField
                    label="Type"
                    value=kind
                    on_change=Callback::new(move |v: String| filter.update(|f| f.set_kind(&v)))
                    options=LocationType::ALL.iter().map(ToString::to_string).collect()
                    placeholder="All Types"
                />
                <SelectField
                    label="World"
                    value=world
                    on_change=Callback::new(move |v: String| filter.update(|f| f.set_world(&v)))
                    options=WORLDS.iter().map(ToString::to_string).collect()
                    placeholder="All Worlds"
                />
                <Link to=AppRoute::CreateLocation.to_path() class="btn btn-primary mb-2">
                    "Add New Location"
                </Link>
            </div>

            <Show when=move || loaded.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! {
                        <p class="text-center py-8 text-base-content/50">"No locations match your filters."</p>
                    }
                >
                    <div class="grid gap-8 sm:grid-cols-2 md:grid-cols-3">
                        <For
                            each=move || visible.get()
                            key=|location| location.id.clone()
                            children=|location| view! { <LocationCard location=location /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::location_json;

    fn listing() -> Vec<Location> {
        let mut all: Vec<Location> = [
            ("t1", "Tavern", "Eberron"),
            ("d1", "Dungeon", "Forgotten Realms"),
            ("t2", "Tavern", "Forgotten Realms"),
            ("c1", "City", "Ravnica"),
        ]
        .into_iter()
        .map(|(id, kind, world)| serde_json::from_value(location_json(id, kind, world)).unwrap())
        .collect();
        all[2].name = "The Yawning Portal".into();
        all[3].description = "Guild hall district with a famous PORTAL".into();
        all
    }

    fn ids(locations: &[Location]) -> Vec<&str> {
        locations.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let all = listing();
        assert_eq!(LocationFilter::default().apply(&all), all);
    }

    #[test]
    fn test_type_filter_yields_exact_subset() {
        let all = listing();
        for kind in LocationType::ALL {
            let filter = LocationFilter {
                kind: Some(kind),
                ..Default::default()
            };
            let expected: Vec<Location> = all.iter().filter(|l| l.kind == kind).cloned().collect();
            assert_eq!(filter.apply(&all), expected, "{kind}");
        }
    }

    #[test]
    fn test_search_matches_name_or_description_case_insensitively() {
        let all = listing();
        let filter = LocationFilter {
            search: "portal".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), ["t2", "c1"]);
    }

    #[test]
    fn test_filters_combine() {
        let all = listing();
        let mut filter = LocationFilter::default();
        filter.set_kind("Tavern");
        filter.set_world("Forgotten Realms");
        assert_eq!(ids(&filter.apply(&all)), ["t2"]);

        filter.set_kind("");
        filter.set_world("");
        assert_eq!(filter, LocationFilter::default());
    }

    #[test]
    fn test_world_filter_is_exact() {
        let mut custom: Location =
            serde_json::from_value(location_json("x", "Temple", "Custom")).unwrap();
        custom.world = "custom".into();
        let filter = LocationFilter {
            world: Some("Custom".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&custom));
    }
}
