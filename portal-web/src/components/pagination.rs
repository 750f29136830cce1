use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub total_pages: u32,
    pub on_change: Callback<u32>,
}

/// Previous/next plus numbered page buttons. Renders nothing when there is
/// a single page.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let page = props.page;
    let previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(page.saturating_sub(1).max(1)))
    };
    let next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(page + 1))
    };

    html! {
        <nav class="flex justify-center items-center gap-2" aria-label="Paginación">
            <button
                class="btn btn-outline btn-sm"
                disabled={page <= 1}
                onclick={previous}
            >
                {"Anterior"}
            </button>
            <div class="flex gap-2">
                { for (1..=props.total_pages).map(|number| {
                    let on_change = props.on_change.clone();
                    let onclick = Callback::from(move |_| on_change.emit(number));
                    let class = if number == page {
                        "btn btn-primary btn-sm"
                    } else {
                        "btn btn-outline btn-sm"
                    };
                    html! {
                        <button {class} {onclick}>{ number }</button>
                    }
                }) }
            </div>
            <button
                class="btn btn-outline btn-sm"
                disabled={page >= props.total_pages}
                onclick={next}
            >
                {"Siguiente"}
            </button>
        </nav>
    }
}
