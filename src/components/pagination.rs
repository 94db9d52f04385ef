use leptos::prelude::*;

// Pages shown on either side of the current one before gaps appear.
const PAGE_WINDOW: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

pub fn visible_pages(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let low = current.saturating_sub(PAGE_WINDOW).max(2);
    let high = (current + PAGE_WINDOW).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if low > 2 {
        items.push(PageItem::Gap);
    }
    items.extend((low..=high).map(PageItem::Page));
    if high < total - 1 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total));
    items
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="pagination-step"
                disabled=move || page.get() <= 1
                on:click=move |_| on_page_change.run(page.get().saturating_sub(1))
            >
                "<"
            </button>
            {move || {
                visible_pages(page.get(), total_pages.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Gap => view! { <span class="pagination-gap">"..."</span> }.into_any(),
                        PageItem::Page(number) => view! {
                            <button
                                class="pagination-page"
                                class:active=move || page.get() == number
                                on:click=move |_| on_page_change.run(number)
                            >
                                {number}
                            </button>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-step"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_page_change.run(page.get() + 1)
            >
                ">"
            </button>
        </nav>
    }
}
