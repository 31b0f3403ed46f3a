//! UI Components
//!
//! Leptos views for the Pessoa screens.

mod pagination_bar;
mod pessoa_delete_dialog;
mod pessoa_detail;
mod pessoa_list;
mod pessoa_update;
mod search_bar;

pub use pagination_bar::PaginationBar;
pub use pessoa_delete_dialog::PessoaDeleteDialog;
pub use pessoa_detail::PessoaDetail;
pub use pessoa_list::PessoaList;
pub use pessoa_update::PessoaUpdate;
pub use search_bar::SearchBar;
