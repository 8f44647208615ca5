//! Pagination controls

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use spm_common::RecordMeta;

const PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

#[component]
pub fn Pagination<FP, FL>(
    meta: ReadSignal<RecordMeta>,
    on_page: FP,
    on_limit: FL,
) -> impl IntoView
where
    FP: Fn(u32) + 'static + Clone + Send + Sync,
    FL: Fn(u32) + 'static + Clone + Send + Sync,
{
    let page = move || meta.get().page();
    let max_page = move || meta.get().max_page();
    let on_first = {
        let on_page = on_page.clone();
        move |_: MouseEvent| on_page(1)
    };
    let on_prev = {
        let on_page = on_page.clone();
        move |_: MouseEvent| on_page(page().saturating_sub(1))
    };
    let on_next = {
        let on_page = on_page.clone();
        move |_: MouseEvent| on_page(page().saturating_add(1))
    };
    let on_last = {
        let on_page = on_page.clone();
        move |_: MouseEvent| on_page(max_page())
    };

    view! {
        <div class="pagination">
            <button class="btn btn-small" disabled=move || page() <= 1 on:click=on_first>
                "First"
            </button>
            <button class="btn btn-small" disabled=move || page() <= 1 on:click=on_prev>
                "Prev"
            </button>
            <span class="page-indicator">
                {move || format!("Page {} of {} ({} records)", page(), max_page(), meta.get().count)}
            </span>
            <button class="btn btn-small" disabled=move || page() >= max_page() on:click=on_next>
                "Next"
            </button>
            <button class="btn btn-small" disabled=move || page() >= max_page() on:click=on_last>
                "Last"
            </button>

            <select
                class="page-size"
                on:change={
                    let on_limit = on_limit.clone();
                    move |ev| {
                        if let Ok(limit) = event_target_value(&ev).parse() {
                            on_limit(limit);
                        }
                    }
                }
            >
                {PAGE_SIZES
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || meta.get().limit() == size
                            >
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
