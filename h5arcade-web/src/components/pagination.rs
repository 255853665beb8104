use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub page: usize,
    pub total_pages: usize,
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

/// Previous/next pagination controls. Renders nothing for a single page.
#[function_component(Pagination)]
pub fn pagination(props: &Props) -> Html {
    if props.total_pages < 2 {
        return Html::default();
    }
    let page = props.page;
    let total_pages = props.total_pages;
    let previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if page > 1 {
                on_change.emit(page - 1);
            }
        })
    };
    let next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if page < total_pages {
                on_change.emit(page + 1);
            }
        })
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button
                type="button"
                class="page-btn"
                onclick={previous}
                disabled={page <= 1}
                aria-label="Previous page"
            >
                { "\u{2039}" }
            </button>
            <span class="page-indicator">{ format!("Page {page} of {total_pages}") }</span>
            <button
                type="button"
                class="page-btn"
                onclick={next}
                disabled={page >= total_pages}
                aria-label="Next page"
            >
                { "\u{203a}" }
            </button>
        </nav>
    }
}
