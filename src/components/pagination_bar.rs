//! Pagination Bar Component
//!
//! Item-count line plus a windowed set of page buttons (at most five),
//! with first/prev/next/last controls.

use leptos::prelude::*;

use crate::pagination::{item_range, page_count, page_window, PaginationState};

#[component]
pub fn PaginationBar(
    #[prop(into)] state: Signal<PaginationState>,
    #[prop(into)] total_items: Signal<u64>,
    #[prop(into)] on_select: Callback<u64>,
) -> impl IntoView {
    let count_line = move || {
        let s = state.get();
        let total = total_items.get();
        let (first, last) = item_range(s.active_page, s.items_per_page, total);
        format!("Showing {}-{} of {} items", first, last, total)
    };

    let buttons = move || {
        let s = state.get();
        let pages = page_count(total_items.get(), s.items_per_page);
        let (start, end) = page_window(s.active_page, pages);
        let active = s.active_page;

        let nav_btn = |label: &'static str, target: u64, disabled: bool| {
            view! {
                <button
                    class="page-btn nav"
                    disabled=disabled
                    on:click=move |_| on_select.run(target)
                >
                    {label}
                </button>
            }
            .into_any()
        };

        let mut out = Vec::new();
        out.push(nav_btn("«", 1, active <= 1));
        out.push(nav_btn("‹", active.saturating_sub(1).max(1), active <= 1));
        for page in start..=end {
            let class = if page == active { "page-btn active" } else { "page-btn" };
            out.push(
                view! {
                    <button class=class on:click=move |_| on_select.run(page)>
                        {page.to_string()}
                    </button>
                }
                .into_any(),
            );
        }
        out.push(nav_btn("›", (active + 1).min(pages.max(1)), active >= pages));
        out.push(nav_btn("»", pages.max(1), active >= pages));
        out
    };

    view! {
        <div class="pagination-bar">
            <div class="item-count">{count_line}</div>
            <div class="pagination">{buttons}</div>
        </div>
    }
}
