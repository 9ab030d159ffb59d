use leptos::prelude::*;

/// Labelled text input or textarea bound to one draft field.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    let control = if multiline {
        view! {
            <textarea
                class="textarea textarea-bordered w-full"
                rows="4"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type.unwrap_or("text")
                class="input input-bordered w-full"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-control w-full mb-2">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            {control}
            {hint.map(|hint| view! {
                <label class="label">
                    <span class="label-text-alt text-base-content/60">{hint}</span>
                </label>
            })}
        </div>
    }
}

/// Labelled `<select>`; an empty `placeholder` option maps to `""`.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control w-full mb-2">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select select-bordered w-full"
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! {
                    <option value="" selected=move || value.with(String::is_empty)>{text}</option>
                })}
                {options
                    .into_iter()
                    .map(|option| {
                        let current = option.clone();
                        let label = option.clone();
                        view! {
                            <option value=option selected=move || value.with(|v| *v == current)>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_field_builds_with_options() {
        let owner = Owner::new();
        owner.set();

        let value = RwSignal::new("Eberron".to_string());
        let changed = RwSignal::new(None::<String>);
        let on_change = Callback::new(move |next: String| changed.set(Some(next)));

        let _view = view! {
            <SelectField
                label="World"
                value=value.into()
                on_change=on_change
                options=vec!["Eberron".to_string(), "Ravnica".to_string()]
                placeholder="All Worlds"
            />
        };

        on_change.run("Ravnica".to_string());
        assert_eq!(changed.get_untracked().as_deref(), Some("Ravnica"));
    }

    #[test]
    fn test_text_field_builds_both_controls() {
        let owner = Owner::new();
        owner.set();

        let value = Signal::derive(|| "Sharn".to_string());
        let on_input = Callback::new(|_: String| {});

        let _single = view! { <TextField label="Name" value=value on_input=on_input /> };
        let _multi = view! {
            <TextField label="Description" value=value on_input=on_input multiline=true hint="Optional" />
        };
    }
}
