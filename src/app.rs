//! Pessoa Admin App
//!
//! Router and store provisioning. Both slices are provided here so every
//! routed view reads the same state.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{PessoaDeleteDialog, PessoaDetail, PessoaList, PessoaUpdate};
use crate::store::{CpfCheckState, PessoaState};

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(PessoaState::default()));
    provide_context(Store::new(CpfCheckState::default()));

    view! {
        <Router>
            <main class="container">
                <Routes fallback=|| {
                    view! { <div class="alert alert-warning">"Page not found"</div> }
                }>
                    <Route path=path!("/") view=PessoaList/>
                    <Route path=path!("/pessoa") view=PessoaList/>
                    <Route path=path!("/pessoa/new") view=PessoaUpdate/>
                    <Route path=path!("/pessoa/:id") view=PessoaDetail/>
                    <Route path=path!("/pessoa/:id/edit") view=PessoaUpdate/>
                    <Route path=path!("/pessoa/:id/delete") view=PessoaDeleteDialog/>
                </Routes>
            </main>
        </Router>
    }
}
