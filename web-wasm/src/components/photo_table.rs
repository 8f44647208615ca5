//! Photo record table
//!
//! Paginated, searchable table with inline tag editing. Rows are keyed on
//! `(id, uuid)` so a server-side image rewrite (which changes the uuid)
//! forces the thumbnail to re-render past the browser cache.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use spm_common::{OrderBy, PhotoRecord, RecordMeta};

#[component]
pub fn PhotoTable<FS, FO, FA, FK, FR, FT, FG>(
    photos: ReadSignal<Vec<PhotoRecord>>,
    meta: ReadSignal<RecordMeta>,
    is_admin: Signal<bool>,
    suggestions: ReadSignal<Option<(i64, Vec<String>)>>,
    on_search: FS,
    on_order: FO,
    on_add_tags: FA,
    on_pick_suggestion: FK,
    on_remove_tag: FR,
    on_rotate: FT,
    on_suggest: FG,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FO: Fn(OrderBy) + 'static + Clone + Send + Sync,
    FA: Fn(i64, String) + 'static + Clone + Send + Sync,
    FK: Fn(i64, String) + 'static + Clone + Send + Sync,
    FR: Fn(i64, String) + 'static + Clone + Send + Sync,
    FT: Fn(i64, i32) + 'static + Clone + Send + Sync,
    FG: Fn(i64, String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="photo-table">
            <SearchBar on_search=on_search />

            <table>
                <thead>
                    <tr>
                        <th></th>
                        <SortableHeader label="ID" order=OrderBy::Id meta=meta on_order=on_order.clone() />
                        <SortableHeader label="Owner" order=OrderBy::Owner meta=meta on_order=on_order.clone() />
                        <SortableHeader
                            label="Updated"
                            order=OrderBy::RecordUpdated
                            meta=meta
                            on_order=on_order
                        />
                        <th>"Tags"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || photos.get()
                        key=|record| (record.id, record.uuid.clone())
                        children=move |record| {
                            let on_add_tags = on_add_tags.clone();
                            let on_pick_suggestion = on_pick_suggestion.clone();
                            let on_remove_tag = on_remove_tag.clone();
                            let on_rotate = on_rotate.clone();
                            let on_suggest = on_suggest.clone();
                            view! {
                                <PhotoRow
                                    record=record
                                    is_admin=is_admin
                                    suggestions=suggestions
                                    on_add_tags=on_add_tags
                                    on_pick_suggestion=on_pick_suggestion
                                    on_remove_tag=on_remove_tag
                                    on_rotate=on_rotate
                                    on_suggest=on_suggest
                                />
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || photos.get().is_empty()>
                <p class="text-muted">
                    {move || {
                        if meta.get().search_term.is_empty() {
                            "No untagged records. Search to browse the catalogue."
                        } else {
                            "No records match this search."
                        }
                    }}
                </p>
            </Show>
        </div>
    }
}

#[component]
fn SearchBar<FS>(on_search: FS) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    let (term, set_term) = signal(String::new());

    view! {
        <div class="search-bar">
            <input
                type="text"
                id="search-term"
                placeholder="Search tags (separate terms with /, -SPACE- finds the whitespace tag)"
                prop:value=move || term.get()
                on:input=move |ev| {
                    set_term.set(event_target_value(&ev));
                }
            />
            <button
                class="btn btn-primary btn-small"
                on:click={
                    let on_search = on_search.clone();
                    move |_| on_search(term.get())
                }
            >
                "Search"
            </button>
            <button
                class="btn btn-secondary btn-small"
                on:click={
                    let on_search = on_search.clone();
                    move |_| {
                        set_term.set(String::new());
                        on_search(String::new());
                    }
                }
            >
                "Clear"
            </button>
        </div>
    }
}

#[component]
fn SortableHeader<FO>(
    label: &'static str,
    order: OrderBy,
    meta: ReadSignal<RecordMeta>,
    on_order: FO,
) -> impl IntoView
where
    FO: Fn(OrderBy) + 'static + Clone + Send + Sync,
{
    let indicator = move || {
        let current = meta.get().order_by;
        if current == order {
            " \u{25B2}"
        } else if current == order.toggled() {
            " \u{25BC}"
        } else {
            ""
        }
    };

    view! {
        <th
            class="sortable"
            on:click={
                let on_order = on_order.clone();
                move |_| on_order(order)
            }
        >
            {label}
            {indicator}
        </th>
    }
}

#[component]
fn PhotoRow<FA, FK, FR, FT, FG>(
    record: PhotoRecord,
    is_admin: Signal<bool>,
    suggestions: ReadSignal<Option<(i64, Vec<String>)>>,
    on_add_tags: FA,
    on_pick_suggestion: FK,
    on_remove_tag: FR,
    on_rotate: FT,
    on_suggest: FG,
) -> impl IntoView
where
    FA: Fn(i64, String) + 'static + Clone + Send + Sync,
    FK: Fn(i64, String) + 'static + Clone + Send + Sync,
    FR: Fn(i64, String) + 'static + Clone + Send + Sync,
    FT: Fn(i64, i32) + 'static + Clone + Send + Sync,
    FG: Fn(i64, String) + 'static + Clone + Send + Sync,
{
    let record_id = record.id;
    let locked = record.mod_lock;
    let (tag_input, set_tag_input) = signal(String::new());

    // Stored so the suggestion list, re-rendered reactively inside the
    // <Show> below, can capture a Copy handle instead of moving the handler.
    let on_pick_suggestion = StoredValue::new(on_pick_suggestion);

    let row_suggestions = move || {
        suggestions
            .get()
            .filter(|(id, _)| *id == record_id)
            .map(|(_, list)| list)
            .unwrap_or_default()
    };

    let submit_tags = {
        let on_add_tags = on_add_tags.clone();
        move |_: MouseEvent| {
            let raw = tag_input.get();
            if !raw.trim().is_empty() {
                set_tag_input.set(String::new());
                on_add_tags(record_id, raw);
            }
        }
    };

    view! {
        <tr class="photo-row" class:locked=move || locked>
            <td class="thumb-cell">
                <a href=record.image_url() target="_blank" rel="noopener noreferrer">
                    <img src=record.thumbnail_url() alt=record.file_name.clone() />
                </a>
            </td>
            <td>
                <span class="record-id">{record.id}</span>
                <span class="file-name">
                    {format!("{}{}", record.file_name, record.file_format)}
                </span>
            </td>
            <td>{record.owner.clone()}</td>
            <td>{record.record_updated.clone()}</td>
            <td class="tags-cell">
                {record
                    .tags
                    .iter()
                    .map(|tag| {
                        let tag = tag.clone();
                        let on_remove_tag = on_remove_tag.clone();
                        view! {
                            <span class="tag-chip">
                                {tag.clone()}
                                <button
                                    class="tag-remove"
                                    disabled=move || locked
                                    on:click={
                                        let tag = tag.clone();
                                        move |_| on_remove_tag(record_id, tag.clone())
                                    }
                                >
                                    "\u{00D7}"
                                </button>
                            </span>
                        }
                    })
                    .collect_view()}

                <div class="tag-add">
                    <input
                        type="text"
                        placeholder="Add tags, comma separated"
                        disabled=move || locked
                        prop:value=move || tag_input.get()
                        on:input={
                            let on_suggest = on_suggest.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                set_tag_input.set(value.clone());
                                on_suggest(record_id, value);
                            }
                        }
                    />
                    <button
                        class="btn btn-small btn-primary"
                        disabled=move || locked
                        on:click=submit_tags
                    >
                        "Add"
                    </button>
                </div>

                <Show when=move || !row_suggestions().is_empty()>
                    <ul class="tag-suggestions">
                        {move || {
                            row_suggestions()
                                .into_iter()
                                .map(|suggestion| {
                                    view! {
                                        <li>
                                            <button
                                                class="suggestion"
                                                on:click={
                                                    let suggestion = suggestion.clone();
                                                    move |_| {
                                                        set_tag_input.set(String::new());
                                                        on_pick_suggestion.with_value(|f| {
                                                            f(record_id, suggestion.clone())
                                                        });
                                                    }
                                                }
                                            >
                                                {suggestion.clone()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </td>
            <td class="actions-cell">
                <Show when=move || locked>
                    <span class="lock-indicator" title="Record locked after a failed write">
                        "\u{1F512}"
                    </span>
                </Show>
                <Show when=move || is_admin.get()>
                    <button
                        class="btn btn-small btn-secondary"
                        disabled=move || locked
                        on:click={
                            let on_rotate = on_rotate.clone();
                            move |_| on_rotate(record_id, 270)
                        }
                    >
                        "\u{21BA} 90\u{00B0}"
                    </button>
                    <button
                        class="btn btn-small btn-secondary"
                        disabled=move || locked
                        on:click={
                            let on_rotate = on_rotate.clone();
                            move |_| on_rotate(record_id, 90)
                        }
                    >
                        "\u{21BB} 90\u{00B0}"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
