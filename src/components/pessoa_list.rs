//! Pessoa List Component
//!
//! Paginated, sortable, searchable table. Pagination/sort state lives
//! here and is mirrored into the `page`/`sort` URL query parameters so
//! reload and back-navigation keep their place; free-text search state
//! is not persisted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use super::{PaginationBar, SearchBar};
use crate::api::ListParams;
use crate::avatar;
use crate::models::{Pessoa, SearchField};
use crate::pagination::PaginationState;
use crate::store::{self, use_pessoa_store, PessoaStateStoreFields};

fn list_params(state: &PaginationState) -> ListParams {
    ListParams {
        page: state.zero_based_page(),
        size: state.items_per_page,
        sort: state.sort_param(),
    }
}

#[component]
pub fn PessoaList() -> impl IntoView {
    let pessoa_store = use_pessoa_store();
    let query = use_query_map();
    let navigate = use_navigate();

    let pagination = RwSignal::new({
        let q = query.get_untracked();
        PaginationState::from_query(q.get("page").as_deref(), q.get("sort").as_deref())
    });

    // State -> fetch + URL. Navigates only when the query string actually
    // differs, so sorting/paging does not pile up redundant history entries.
    Effect::new(move |_| {
        let state = pagination.get();
        spawn_local(store::fetch_list(pessoa_store, Some(list_params(&state))));

        let q = query.get_untracked();
        let current = (q.get("page"), q.get("sort"));
        let wanted = (Some(state.active_page.to_string()), Some(state.sort_param()));
        if current != wanted {
            navigate(&format!("/pessoa?{}", state.to_query()), NavigateOptions::default());
        }
    });

    // URL -> state, for back/forward navigation. Only applies when both
    // parameters are present, matching how the URL is written above.
    Effect::new(move |_| {
        let q = query.get();
        if let (Some(page), Some(sort)) = (q.get("page"), q.get("sort")) {
            let next = PaginationState::from_query(Some(&page), Some(&sort));
            if next != pagination.get_untracked() {
                pagination.set(next);
            }
        }
    });

    let entities = move || pessoa_store.entities().get();
    let loading = move || pessoa_store.loading().get();
    let total_items = Signal::derive(move || pessoa_store.total_items().get());
    let error_message = move || pessoa_store.error_message().get();

    // Search bypasses pagination: results replace the table as-is.
    let on_search = Callback::new(move |(field, term): (SearchField, String)| {
        spawn_local(store::search(pessoa_store, field, term));
    });
    let on_clear = Callback::new(move |_| {
        let state = pagination.get_untracked();
        spawn_local(store::fetch_list(pessoa_store, Some(list_params(&state))));
    });

    let on_refresh = move |_| {
        let state = pagination.get_untracked();
        spawn_local(store::fetch_list(pessoa_store, Some(list_params(&state))));
    };

    let on_page_select = Callback::new(move |page: u64| {
        pagination.update(|s| s.active_page = page);
    });

    let sort_by = move |field: &'static str| {
        move |_| pagination.update(|s| s.toggle_sort(field))
    };

    view! {
        <div class="pessoa-list">
            <div class="list-header">
                <h2>"Pessoas"</h2>
                <div class="list-actions">
                    <button class="refresh-btn" disabled=loading on:click=on_refresh>
                        "Refresh List"
                    </button>
                    <a class="btn create-btn" href="/pessoa/new">
                        "Create new Pessoa"
                    </a>
                </div>
            </div>

            <SearchBar on_search=on_search on_clear=on_clear/>

            {move || {
                error_message()
                    .map(|msg| view! { <div class="alert alert-danger">{msg}</div> })
            }}

            <Show when=move || loading()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !entities().is_empty()>
                <table class="pessoa-table">
                    <thead>
                        <tr>
                            <th class="hand" on:click=sort_by("name")>
                                "Name"
                            </th>
                            <th class="hand" on:click=sort_by("cpf")>
                                "Cpf"
                            </th>
                            <th class="hand" on:click=sort_by("email")>
                                "Email"
                            </th>
                            <th class="hand" on:click=sort_by("avatar")>
                                "Avatar"
                            </th>
                            <th class="hand" on:click=sort_by("birthDate")>
                                "Birth Date"
                            </th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || entities()
                            key=|pessoa| pessoa.id
                            children=move |pessoa: Pessoa| {
                                let id = pessoa.id.unwrap_or_default();
                                let row_href = move |suffix: &str| {
                                    let q = pagination.get().to_query();
                                    format!("/pessoa/{}{}?{}", id, suffix, q)
                                };
                                let view_href = move || row_href("");
                                let edit_href = move || row_href("/edit");
                                let delete_href = move || row_href("/delete");
                                let avatar_cell = pessoa
                                    .avatar
                                    .as_ref()
                                    .zip(pessoa.avatar_content_type.as_ref())
                                    .map(|(body, ct)| {
                                        view! {
                                            <img class="avatar-thumb" src=avatar::data_url(ct, body)/>
                                            <span class="avatar-meta">
                                                {format!(
                                                    "{}, {}",
                                                    ct,
                                                    avatar::format_bytes(avatar::byte_size(body)),
                                                )}
                                            </span>
                                        }
                                    });
                                let birth_date = pessoa
                                    .birth_date
                                    .map(|d| d.format("%d/%m/%Y").to_string());
                                view! {
                                    <tr>
                                        <td>{pessoa.name.clone()}</td>
                                        <td>{pessoa.cpf.clone()}</td>
                                        <td>{pessoa.email.clone()}</td>
                                        <td>{avatar_cell}</td>
                                        <td>{birth_date}</td>
                                        <td class="row-actions">
                                            <a class="btn view-btn" href=view_href>
                                                "View"
                                            </a>
                                            <a class="btn edit-btn" href=edit_href>
                                                "Edit"
                                            </a>
                                            <a class="btn delete-btn" href=delete_href>
                                                "Delete"
                                            </a>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show when=move || entities().is_empty() && !loading()>
                <div class="alert alert-warning">"No Pessoas found"</div>
            </Show>

            <Show when=move || { total_items.get() > 0 && !entities().is_empty() }>
                <PaginationBar
                    state=Signal::derive(move || pagination.get())
                    total_items=total_items
                    on_select=on_page_select
                />
            </Show>
        </div>
    }
}
