//! Pessoa Detail Component
//!
//! Read-only view of a single record, fetched from the route id.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::avatar;
use crate::store::{self, use_pessoa_store, PessoaStateStoreFields};

#[component]
pub fn PessoaDetail() -> impl IntoView {
    let pessoa_store = use_pessoa_store();
    let params = use_params_map();

    Effect::new(move |_| {
        if let Some(id) = params.read().get("id").and_then(|v| v.parse::<i64>().ok()) {
            spawn_local(store::fetch_one(pessoa_store, id));
        }
    });

    let entity = move || pessoa_store.entity().get();

    let avatar_block = move || {
        let pessoa = entity();
        pessoa
            .avatar
            .as_ref()
            .zip(pessoa.avatar_content_type.as_ref())
            .map(|(body, ct)| {
                view! {
                    <img class="avatar-preview" src=avatar::data_url(ct, body)/>
                    <span class="avatar-meta">
                        {format!("{}, {}", ct, avatar::format_bytes(avatar::byte_size(body)))}
                    </span>
                }
            })
    };

    let edit_href = move || {
        format!("/pessoa/{}/edit", entity().id.unwrap_or_default())
    };

    view! {
        <div class="pessoa-detail">
            <h2>"Pessoa"</h2>
            <dl class="entity-details">
                <dt>"Name"</dt>
                <dd>{move || entity().name}</dd>
                <dt>"Cpf"</dt>
                <dd>{move || entity().cpf}</dd>
                <dt>"Email"</dt>
                <dd>{move || entity().email}</dd>
                <dt>"Avatar"</dt>
                <dd>{avatar_block}</dd>
                <dt>"Birth Date"</dt>
                <dd>{move || entity().birth_date.map(|d| d.format("%d/%m/%Y").to_string())}</dd>
            </dl>
            <a class="btn back-btn" href="/pessoa">
                "Back"
            </a>
            <a class="btn edit-btn" href=edit_href>
                "Edit"
            </a>
        </div>
    }
}
