//! Pessoa Delete Dialog
//!
//! Confirmation modal routed at /pessoa/:id/delete. Confirming performs
//! a soft delete: the record is flagged `excluded` and drops out of the
//! default list, which filters excluded records server-side.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use leptos_router::NavigateOptions;

use crate::store::{self, use_pessoa_store, PessoaStateStoreFields};

#[component]
pub fn PessoaDeleteDialog() -> impl IntoView {
    let pessoa_store = use_pessoa_store();
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    // Guards the auto-close below: update_success may still be true from
    // an earlier screen when the dialog mounts, so only close once our
    // own fetch has resolved.
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        if let Some(id) = params.read().get("id").and_then(|v| v.parse::<i64>().ok()) {
            spawn_local(async move {
                store::fetch_one(pessoa_store, id).await;
                set_loaded.set(true);
            });
        }
    });

    let back_href = {
        let q = query.get_untracked();
        match (q.get("page"), q.get("sort")) {
            (Some(page), Some(sort)) => format!("/pessoa?page={}&sort={}", page, sort),
            _ => "/pessoa".to_string(),
        }
    };

    {
        let navigate = navigate.clone();
        let back_href = back_href.clone();
        Effect::new(move |_| {
            if pessoa_store.update_success().get() && loaded.get_untracked() {
                set_loaded.set(false);
                navigate(&back_href, NavigateOptions::default());
            }
        });
    }

    let on_cancel = {
        let navigate = navigate.clone();
        let back_href = back_href.clone();
        move |_| navigate(&back_href, NavigateOptions::default())
    };

    let on_confirm = move |_| {
        let entity = pessoa_store.entity().get_untracked();
        spawn_local(store::soft_delete(pessoa_store, entity));
    };

    let updating = move || pessoa_store.updating().get();
    let entity_label = move || {
        let entity = pessoa_store.entity().get();
        entity
            .name
            .or(entity.id.map(|id| format!("#{}", id)))
            .unwrap_or_default()
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>"Confirm delete operation"</h3>
                </div>
                <div class="modal-body">
                    {move || format!("Are you sure you want to delete Pessoa {}?", entity_label())}
                </div>
                <div class="modal-footer">
                    <button class="btn cancel-btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button class="btn delete-btn" disabled=updating on:click=on_confirm>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
