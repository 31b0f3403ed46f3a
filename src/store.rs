//! Pessoa Store Slices
//!
//! Centralized state built on Leptos reactive_stores, mirroring the REST
//! call lifecycle: reads drive `loading`, writes drive `updating` and
//! `update_success`, failures land in `error_message`. All mutation goes
//! through the operation functions below, so each slice has a single
//! writer; views only read.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{self, ApiError, ListParams};
use crate::models::{Pessoa, SearchField};

/// Main entity slice
#[derive(Clone, Debug, Default, Store)]
pub struct PessoaState {
    /// Current page of entities, in server order
    pub entities: Vec<Pessoa>,
    /// Selected/edited entity; blank default when nothing is loaded
    pub entity: Pessoa,
    pub loading: bool,
    pub updating: bool,
    pub update_success: bool,
    /// Full server-side count, from the x-total-count header
    pub total_items: u64,
    pub error_message: Option<String>,
    /// Monotonic counter guarding against out-of-order search responses
    pub search_seq: u64,
}

pub type PessoaStore = Store<PessoaState>;

pub fn use_pessoa_store() -> PessoaStore {
    expect_context::<PessoaStore>()
}

/// Cpf existence-check slice, independent of the entity slice
#[derive(Clone, Debug, Default, Store)]
pub struct CpfCheckState {
    pub exists: bool,
    pub loading: bool,
    /// Monotonic counter guarding against out-of-order check responses
    pub check_seq: u64,
}

pub type CpfCheckStore = Store<CpfCheckState>;

pub fn use_cpf_check_store() -> CpfCheckStore {
    expect_context::<CpfCheckStore>()
}

// ========================
// Lifecycle helpers
// ========================

fn begin_read(store: &PessoaStore) {
    store.error_message().set(None);
    store.update_success().set(false);
    store.loading().set(true);
}

fn begin_write(store: &PessoaStore) {
    store.error_message().set(None);
    store.update_success().set(false);
    store.updating().set(true);
}

fn fail(store: &PessoaStore, err: ApiError) {
    web_sys::console::error_1(&format!("[Store] {}", err).into());
    store.loading().set(false);
    store.updating().set(false);
    store.error_message().set(Some(err.to_string()));
}

fn finish_write(store: &PessoaStore, saved: Pessoa) {
    store.updating().set(false);
    store.loading().set(false);
    store.update_success().set(true);
    store.entity().set(saved);
}

// ========================
// Search supersession
// ========================

/// Take the next sequence number for a request that will replace
/// `entities`. Any search still in flight under an older number loses.
fn begin_entities_seq(store: &PessoaStore) -> u64 {
    let seq = store.search_seq().get_untracked() + 1;
    store.search_seq().set(seq);
    seq
}

fn entities_superseded(store: &PessoaStore, seq: u64) -> bool {
    store.search_seq().get_untracked() != seq
}

fn begin_check_seq(store: &CpfCheckStore) -> u64 {
    let seq = store.check_seq().get_untracked() + 1;
    store.check_seq().set(seq);
    seq
}

fn check_superseded(store: &CpfCheckStore, seq: u64) -> bool {
    store.check_seq().get_untracked() != seq
}

/// Silent refresh of the default list page after a successful write.
/// Does not touch the lifecycle flags, so `update_success` stays visible
/// to whoever is waiting on it.
async fn refresh_list(store: PessoaStore) {
    begin_entities_seq(&store);
    if let Ok(page) = api::list(None).await {
        store.entities().set(page.items);
        store.total_items().set(page.total_items);
    }
}

// ========================
// Operations
// ========================

/// GET a page of entities and replace `entities` + `total_items`.
/// Dispatching a paged fetch invalidates any search still in flight, so
/// clearing the search box (or paging/sorting/refreshing) cannot be
/// overwritten by a late search response.
pub async fn fetch_list(store: PessoaStore, params: Option<ListParams>) {
    begin_entities_seq(&store);
    begin_read(&store);
    match api::list(params.as_ref()).await {
        Ok(page) => {
            store.loading().set(false);
            store.entities().set(page.items);
            store.total_items().set(page.total_items);
        }
        Err(e) => fail(&store, e),
    }
}

/// GET a filtered list via the field-specific search endpoint.
/// Each call takes a fresh sequence number; a response that comes back
/// after a newer call was dispatched is dropped instead of overwriting
/// the newer results.
pub async fn search(store: PessoaStore, field: SearchField, term: String) {
    let seq = begin_entities_seq(&store);
    begin_read(&store);
    let result = api::search(field, &term).await;
    if entities_superseded(&store, seq) {
        // superseded by a later keystroke or a paged fetch
        return;
    }
    match result {
        Ok(items) => {
            store.loading().set(false);
            store.entities().set(items);
        }
        Err(e) => fail(&store, e),
    }
}

/// GET a single entity into `entity`
pub async fn fetch_one(store: PessoaStore, id: i64) {
    begin_read(&store);
    match api::get_one(id).await {
        Ok(entity) => {
            store.loading().set(false);
            store.entity().set(entity);
        }
        Err(e) => fail(&store, e),
    }
}

/// POST a new entity, then refresh the default list page
pub async fn create(store: PessoaStore, entity: Pessoa) {
    begin_write(&store);
    match api::create(&entity).await {
        Ok(saved) => {
            finish_write(&store, saved);
            refresh_list(store).await;
        }
        Err(e) => fail(&store, e),
    }
}

/// PUT the full entity, then refresh the default list page
pub async fn update(store: PessoaStore, entity: Pessoa) {
    begin_write(&store);
    match api::update(&entity).await {
        Ok(saved) => {
            finish_write(&store, saved);
            refresh_list(store).await;
        }
        Err(e) => fail(&store, e),
    }
}

/// PATCH a subset of fields; same contract as `update`
pub async fn partial_update(store: PessoaStore, entity: Pessoa) {
    begin_write(&store);
    match api::partial_update(&entity).await {
        Ok(saved) => {
            finish_write(&store, saved);
            refresh_list(store).await;
        }
        Err(e) => fail(&store, e),
    }
}

/// Flag the entity as excluded instead of removing it. The list endpoint
/// filters excluded records, so the row disappears on the next fetch.
pub async fn soft_delete(store: PessoaStore, mut entity: Pessoa) {
    begin_write(&store);
    entity.excluded = Some(true);
    match api::update(&entity).await {
        Ok(_) => {
            store.updating().set(false);
            store.update_success().set(true);
            store.entity().set(Pessoa::default());
            refresh_list(store).await;
        }
        Err(e) => fail(&store, e),
    }
}

/// Hard DELETE; kept for backends without the soft-delete contract
pub async fn delete(store: PessoaStore, id: i64) {
    begin_write(&store);
    match api::delete(id).await {
        Ok(()) => {
            store.updating().set(false);
            store.update_success().set(true);
            store.entity().set(Pessoa::default());
            refresh_list(store).await;
        }
        Err(e) => fail(&store, e),
    }
}

/// Restore the slice to its initial state. Used when entering the
/// "create new" form so a previous edit does not leak into it.
pub fn reset(store: PessoaStore) {
    store.entities().set(Vec::new());
    store.entity().set(Pessoa::default());
    store.loading().set(false);
    store.updating().set(false);
    store.update_success().set(false);
    store.total_items().set(0);
    store.error_message().set(None);
}

/// GET whether `cpf` is already taken, into the check slice. Guarded
/// like `search`: a slow response for an old value never overwrites the
/// answer for the value currently in the field.
pub async fn check_exists(store: CpfCheckStore, cpf: String) {
    let seq = begin_check_seq(&store);
    store.loading().set(true);
    let result = api::check_exists(&cpf).await;
    if check_superseded(&store, seq) {
        return;
    }
    match result {
        Ok(exists) => {
            store.loading().set(false);
            store.exists().set(exists);
        }
        Err(e) => {
            // best-effort check; the server still enforces uniqueness
            web_sys::console::error_1(&format!("[CpfCheck] {}", e).into());
            store.loading().set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_search_supersedes_older_response() {
        let store = PessoaStore::new(PessoaState::default());
        let first = begin_entities_seq(&store);
        let second = begin_entities_seq(&store);
        assert!(entities_superseded(&store, first));
        assert!(!entities_superseded(&store, second));
    }

    #[test]
    fn test_paged_fetch_invalidates_in_flight_search() {
        let store = PessoaStore::new(PessoaState::default());
        // a search goes out...
        let search_seq = begin_entities_seq(&store);
        assert!(!entities_superseded(&store, search_seq));
        // ...then the input is cleared and the paged list is re-fetched
        // before the search resolves
        let list_seq = begin_entities_seq(&store);
        assert!(entities_superseded(&store, search_seq));
        assert!(!entities_superseded(&store, list_seq));
    }

    #[test]
    fn test_newer_cpf_check_supersedes_older_response() {
        let store = CpfCheckStore::new(CpfCheckState::default());
        let first = begin_check_seq(&store);
        let second = begin_check_seq(&store);
        assert!(check_superseded(&store, first));
        assert!(!check_superseded(&store, second));
    }
}
