use huzzah_shared::MAX_RATING;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Star fills for `value`, rounded to the nearest half star.
pub fn star_fills(value: f64) -> Vec<StarFill> {
    let halves = if value.is_finite() {
        (value * 2.0).round().clamp(0.0, f64::from(MAX_RATING) * 2.0) as u32
    } else {
        0
    };

    (1..=u32::from(MAX_RATING))
        .map(|star| {
            let filled = star * 2;
            if halves >= filled {
                StarFill::Full
            } else if halves + 1 == filled {
                StarFill::Half
            } else {
                StarFill::Empty
            }
        })
        .collect()
}

/// Read-only star display
#[component]
pub fn RatingStars(#[prop(into)] value: Signal<f64>) -> impl IntoView {
    view! {
        <div class="rating rating-sm rating-half pointer-events-none" aria-label=move || format!("{:.1} of {MAX_RATING}", value.get())>
            {move || {
                star_fills(value.get())
                    .into_iter()
                    .map(|fill| {
                        let class = match fill {
                            StarFill::Full => "text-warning",
                            StarFill::Half => "text-warning opacity-60",
                            StarFill::Empty => "text-base-300",
                        };
                        view! { <span class=class>"★"</span> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Clickable 1..=5 picker; clicking the current value clears it.
#[component]
pub fn RatingPicker(value: Signal<u8>, on_change: Callback<u8>) -> impl IntoView {
    view! {
        <div class="rating rating-md" role="radiogroup">
            {(1..=MAX_RATING)
                .map(|star| {
                    let on_click = move |_| {
                        let next = if value.get_untracked() == star { 0 } else { star };
                        on_change.run(next);
                    };
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if value.get() >= star { "btn btn-ghost btn-xs text-warning text-xl" } else { "btn btn-ghost btn-xs text-base-300 text-xl" }
                            }
                            aria-label=format!("{star} star")
                            on:click=on_click
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
