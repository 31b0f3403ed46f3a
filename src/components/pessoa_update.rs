//! Pessoa Create/Edit Form
//!
//! Two phases: "new" (no route id, blank entity) and "edit" (route id,
//! entity fetched and hydrated into the fields once). Submit merges the
//! form values over the last-fetched entity so a save always round-trips
//! the full record.
//!
//! The Cpf field is only editable at creation; while typing, an
//! existence check runs behind a 300 ms debounce and feeds the duplicate
//! validation.

use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use crate::avatar;
use crate::store::{self, use_cpf_check_store, use_pessoa_store, CpfCheckStateStoreFields, PessoaStateStoreFields};
use crate::validation::{validate_cpf, validate_email, validate_name};

const CPF_CHECK_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug, Default, PartialEq)]
struct FormErrors {
    name: Option<String>,
    cpf: Option<String>,
    email: Option<String>,
}

impl FormErrors {
    fn any(&self) -> bool {
        self.name.is_some() || self.cpf.is_some() || self.email.is_some()
    }
}

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    input.value()
}

#[component]
pub fn PessoaUpdate() -> impl IntoView {
    let pessoa_store = use_pessoa_store();
    let check_store = use_cpf_check_store();
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    let route_id = params
        .read_untracked()
        .get("id")
        .and_then(|v| v.parse::<i64>().ok());
    let is_new = route_id.is_none();

    // Back to the list, keeping the page/sort position we came from
    let back_href = {
        let q = query.get_untracked();
        match (q.get("page"), q.get("sort")) {
            (Some(page), Some(sort)) => format!("/pessoa?page={}&sort={}", page, sort),
            _ => "/pessoa".to_string(),
        }
    };

    let (name, set_name) = signal(String::new());
    let (cpf, set_cpf) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (birth_date, set_birth_date) = signal(String::new());
    let (picked_avatar, set_picked_avatar) = signal::<Option<(String, String)>>(None);
    let (errors, set_errors) = signal(FormErrors::default());
    let (hydrated, set_hydrated) = signal(false);
    let cpf_check_seq = RwSignal::new(0u64);

    // new -> blank slate; edit -> fetch the record
    Effect::new(move |_| {
        match route_id {
            None => store::reset(pessoa_store),
            Some(id) => spawn_local(store::fetch_one(pessoa_store, id)),
        }
    });

    // Hydrate the fields once the edited entity arrives
    Effect::new(move |_| {
        let entity = pessoa_store.entity().get();
        if is_new || hydrated.get_untracked() || entity.id != route_id {
            return;
        }
        set_name.set(entity.name.unwrap_or_default());
        set_cpf.set(entity.cpf.unwrap_or_default());
        set_email.set(entity.email.unwrap_or_default());
        set_birth_date.set(
            entity
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        set_hydrated.set(true);
    });

    // Leave once the save goes through
    {
        let navigate = navigate.clone();
        let back_href = back_href.clone();
        Effect::new(move |_| {
            if pessoa_store.update_success().get() {
                navigate(&back_href, NavigateOptions::default());
            }
        });
    }

    let on_cpf_input = move |ev: web_sys::Event| {
        let value = input_value(&ev);
        set_cpf.set(value.clone());
        let seq = cpf_check_seq.get_untracked() + 1;
        cpf_check_seq.set(seq);
        spawn_local(async move {
            TimeoutFuture::new(CPF_CHECK_DEBOUNCE_MS).await;
            if cpf_check_seq.get_untracked() == seq && !value.is_empty() {
                store::check_exists(check_store, value).await;
            }
        });
    };

    let on_avatar_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let Some(file) = input.files().and_then(|files| files.item(0)) else {
            return;
        };
        spawn_local(async move {
            match avatar::read_image_file(file).await {
                Ok(picked) => set_picked_avatar.set(Some(picked)),
                Err(e) => web_sys::console::error_1(&format!("[PessoaUpdate] {}", e).into()),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // New records validate against the duplicate check; the Cpf of an
        // existing record is immutable so the check does not apply.
        let duplicate = is_new && check_store.exists().get_untracked();
        let next_errors = FormErrors {
            name: validate_name(&name.get_untracked()),
            cpf: if is_new {
                validate_cpf(&cpf.get_untracked(), duplicate)
            } else {
                None
            },
            email: validate_email(&email.get_untracked()),
        };
        if next_errors.any() {
            set_errors.set(next_errors);
            return;
        }
        set_errors.set(FormErrors::default());

        let mut entity = pessoa_store.entity().get_untracked();
        entity.name = Some(name.get_untracked());
        if is_new {
            entity.cpf = Some(cpf.get_untracked());
        }
        entity.email = Some(email.get_untracked());
        entity.birth_date =
            NaiveDate::parse_from_str(&birth_date.get_untracked(), "%Y-%m-%d").ok();
        if let Some((content_type, body)) = picked_avatar.get_untracked() {
            entity.avatar_content_type = Some(content_type);
            entity.avatar = Some(body);
        }

        if is_new {
            spawn_local(store::create(pessoa_store, entity));
        } else {
            spawn_local(store::update(pessoa_store, entity));
        }
    };

    let loading = move || pessoa_store.loading().get();
    let updating = move || pessoa_store.updating().get();
    let error_message = move || pessoa_store.error_message().get();

    let current_avatar = move || {
        if let Some((ct, body)) = picked_avatar.get() {
            return Some((ct, body));
        }
        let entity = pessoa_store.entity().get();
        entity.avatar_content_type.zip(entity.avatar)
    };

    let back_href_btn = back_href.clone();
    view! {
        <div class="pessoa-update">
            <h2>{if is_new { "Create a Pessoa" } else { "Edit a Pessoa" }}</h2>

            {move || {
                error_message()
                    .map(|msg| view! { <div class="alert alert-danger">{msg}</div> })
            }}

            <Show when=move || loading()>
                <p class="loading">"Loading..."</p>
            </Show>

            <Show when=move || !loading()>
                <form class="pessoa-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="pessoa-name">"Name"</label>
                        <input
                            id="pessoa-name"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(input_value(&ev))
                        />
                        {move || {
                            errors.get().name.map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                    </div>

                    <div class="form-field">
                        <label for="pessoa-cpf">"Cpf"</label>
                        <input
                            id="pessoa-cpf"
                            type="text"
                            placeholder="000.000.000-00"
                            disabled=!is_new
                            prop:value=move || cpf.get()
                            on:input=on_cpf_input
                        />
                        {move || {
                            errors.get().cpf.map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                        <Show when=move || {
                            is_new && check_store.exists().get() && !cpf.get().is_empty()
                        }>
                            <span class="field-error">"A Pessoa with this Cpf already exists."</span>
                        </Show>
                    </div>

                    <div class="form-field">
                        <label for="pessoa-email">"Email"</label>
                        <input
                            id="pessoa-email"
                            type="text"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(input_value(&ev))
                        />
                        {move || {
                            errors.get().email.map(|e| view! { <span class="field-error">{e}</span> })
                        }}
                    </div>

                    <div class="form-field">
                        <label for="pessoa-avatar">"Avatar"</label>
                        <input
                            id="pessoa-avatar"
                            type="file"
                            accept="image/*"
                            on:change=on_avatar_change
                        />
                        {move || {
                            current_avatar()
                                .map(|(ct, body)| {
                                    view! {
                                        <img class="avatar-preview" src=avatar::data_url(&ct, &body)/>
                                        <span class="avatar-meta">
                                            {format!(
                                                "{}, {}",
                                                ct,
                                                avatar::format_bytes(avatar::byte_size(&body)),
                                            )}
                                        </span>
                                    }
                                })
                        }}
                    </div>

                    <div class="form-field">
                        <label for="pessoa-birth-date">"Birth Date"</label>
                        <input
                            id="pessoa-birth-date"
                            type="date"
                            prop:value=move || birth_date.get()
                            on:input=move |ev| set_birth_date.set(input_value(&ev))
                        />
                    </div>

                    <div class="form-actions">
                        <a class="btn back-btn" href=back_href_btn.clone()>
                            "Back"
                        </a>
                        <button class="btn save-btn" type="submit" disabled=updating>
                            "Save"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
