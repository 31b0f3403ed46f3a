//! Search Bar Component
//!
//! Field-selector dropdown plus a text input. Every keystroke dispatches
//! a field-specific search through `on_search`; clearing the input fires
//! `on_clear` so the parent can restore the normal paged list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::SearchField;

#[component]
pub fn SearchBar(
    #[prop(into)] on_search: Callback<(SearchField, String)>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let (field, set_field) = signal(SearchField::Name);
    let (term, set_term) = signal(String::new());

    let on_field_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        if let Some(next) = SearchField::parse(&select.value()) {
            set_field.set(next);
            // re-run the active search against the newly chosen field
            let current = term.get();
            if !current.is_empty() {
                on_search.run((next, current));
            }
        }
    };

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let value = input.value();
        set_term.set(value.clone());
        if value.is_empty() {
            on_clear.run(());
        } else {
            on_search.run((field.get(), value));
        }
    };

    view! {
        <div class="search-bar">
            <select class="search-field" on:change=on_field_change>
                {SearchField::ALL
                    .iter()
                    .map(|f| {
                        view! { <option value=f.param()>{f.label()}</option> }
                    })
                    .collect_view()}
            </select>
            <input
                type="text"
                class="search-input"
                placeholder=move || format!("Search by {}...", field.get().label())
                prop:value=move || term.get()
                on:input=on_input
            />
        </div>
    }
}
