//! Root application component
//!
//! Owns all shared state (the paginated record view-model, the session
//! flags, the transient banner and tag suggestions) and every handler that
//! talks to the backend. Child components are presentational: they receive
//! read signals and callbacks, nothing else.

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use spm_common::{
    merge_updated_record, parse_tag_input, validate_rotation_degrees, validate_search,
    validate_tags, ApiRequest, AuthStatus, OrderBy, PhotoRecord, PhotosPage, ProcessAction,
    ProcessReply, RecordMeta, SessionFlags, TagsPage, UpdateMode,
};

use crate::api::{self, API_ERROR_MSG};
use crate::components::{
    admin_tools::AdminTools, footer::Footer, header::Header, message::Message,
    pagination::Pagination, photo_table::PhotoTable,
};
use crate::config::AppConfig;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let api_base = config.api_base;
    let greeting = config.greeting;
    let footer_text = config.footer_text;
    let theme_class = config.theme.css_class();
    let page_size = config.page_size;

    // Shared application state, replaced wholesale on each server response
    let (meta, set_meta) = signal(RecordMeta::new(page_size));
    let (photos, set_photos) = signal(Vec::<PhotoRecord>::new());
    let (session, set_session) = signal(SessionFlags::default());
    let (message, set_message) = signal(None::<String>);
    let (suggestions, set_suggestions) = signal(None::<(i64, Vec<String>)>);

    let logged_in = Signal::derive(move || session.get().logged_in);
    let is_admin = Signal::derive(move || session.get().user_is_admin);
    let username = Signal::derive(move || session.get().username);

    // Fetch the current page of records. `quiet` suppresses the error banner
    // for the speculative load at mount, when no session may exist yet.
    let load_photos = move |quiet: bool| {
        let (request, bust) = {
            let m = meta.get_untracked();
            (
                ApiRequest::FetchPhotos {
                    page: m.page(),
                    limit: m.limit(),
                    order_by: m.order_by,
                    term: m.search_term.clone(),
                },
                m.cache_bust,
            )
        };
        spawn_local(async move {
            match api::fetch_json::<PhotosPage>(api_base, &request, bust).await {
                Ok(page) => {
                    set_session.update(|s| s.note_records(&page));
                    set_meta.update(|m| m.apply_page(&page));
                    set_photos.set(page.results);
                }
                Err(e) => {
                    console::error!(format!("photos fetch failed: {:?}", e));
                    if !quiet {
                        set_message.set(Some(API_ERROR_MSG.to_string()));
                    }
                }
            }
        });
    };

    // Merge a single updated record back into the table without refetching
    // the whole page, then flag the next fetch to bypass the HTTP cache so
    // rewritten thumbnails show up.
    let merge_record = move |record: PhotoRecord| {
        set_session.update(|s| s.user_is_admin = record.user_is_admin);
        set_photos.update(|list| {
            merge_updated_record(list, record);
        });
        set_meta.update(|m| m.cache_bust = true);
    };

    let update_record = move |request: ApiRequest| {
        spawn_local(async move {
            match api::fetch_json::<PhotoRecord>(api_base, &request, false).await {
                Ok(record) => merge_record(record),
                Err(e) => {
                    console::error!(format!("record update failed: {:?}", e));
                    set_message.set(Some(API_ERROR_MSG.to_string()));
                }
            }
        });
    };

    let add_tags = move |record_id: i64, tags: Vec<String>| {
        if tags.is_empty() {
            return;
        }
        set_suggestions.set(None);
        update_record(ApiRequest::UpdateTags {
            record_id,
            tags,
            mode: UpdateMode::AddTags,
        });
    };

    // ---- table handlers ----

    let on_search = move |term: String| match validate_search(&term) {
        Ok(term) => {
            set_suggestions.set(None);
            set_meta.update(|m| m.set_search_term(term));
            load_photos(false);
        }
        Err(e) => set_message.set(Some(e.to_string())),
    };

    let on_page = move |page: u32| {
        set_meta.update(|m| m.set_page(page));
        load_photos(false);
    };

    let on_limit = move |limit: u32| {
        set_meta.update(|m| m.set_limit(limit));
        load_photos(false);
    };

    let on_order = move |order: OrderBy| {
        set_meta.update(|m| {
            m.order_by = if m.order_by == order {
                order.toggled()
            } else {
                order
            };
        });
        load_photos(false);
    };

    // Free-typed input: comma-separated list of new tags
    let on_add_tags = move |record_id: i64, raw: String| match parse_tag_input(&raw) {
        Ok(tags) => add_tags(record_id, tags),
        Err(e) => set_message.set(Some(e.to_string())),
    };

    // Suggestion pick: one existing tag, taken verbatim. Commas are legal
    // tag characters, so this path must not re-split the picked tag.
    let on_pick_suggestion = move |record_id: i64, tag: String| {
        match validate_tags(std::slice::from_ref(&tag)) {
            Ok(tags) => add_tags(record_id, tags),
            Err(e) => set_message.set(Some(e.to_string())),
        }
    };

    let on_remove_tag = move |record_id: i64, tag: String| {
        update_record(ApiRequest::UpdateTags {
            record_id,
            tags: vec![tag],
            mode: UpdateMode::RemoveTag,
        });
    };

    let on_rotate = move |record_id: i64, degrees: i32| match validate_rotation_degrees(degrees) {
        Ok(degrees) => update_record(ApiRequest::RotateImage { record_id, degrees }),
        Err(e) => set_message.set(Some(e.to_string())),
    };

    let on_suggest = move |record_id: i64, term: String| {
        if term.trim().len() < 2 || validate_search(&term).is_err() {
            set_suggestions.set(None);
            return;
        }
        let request = ApiRequest::FetchTags { term };
        spawn_local(async move {
            match api::fetch_json::<TagsPage>(api_base, &request, false).await {
                Ok(page) => set_suggestions.set(Some((record_id, page.suggestions()))),
                Err(_) => set_suggestions.set(None),
            }
        });
    };

    // ---- admin batch jobs ----

    let on_process = move |action: ProcessAction| {
        spawn_local(async move {
            match api::fetch_json::<ProcessReply>(api_base, &ApiRequest::Process(action), false)
                .await
            {
                Ok(reply) => set_message.set(Some(reply.status)),
                Err(e) => {
                    console::error!(format!("process job failed: {:?}", e));
                    set_message.set(Some(API_ERROR_MSG.to_string()));
                }
            }
        });
    };

    let on_prune = move |_: ()| {
        spawn_local(async move {
            match api::fetch_json::<ProcessReply>(api_base, &ApiRequest::PruneTags, false).await {
                Ok(reply) => set_message.set(Some(reply.status)),
                Err(e) => {
                    console::error!(format!("prune failed: {:?}", e));
                    set_message.set(Some(API_ERROR_MSG.to_string()));
                }
            }
        });
    };

    let on_search_replace = move |search: String, replace: String| {
        let search = match validate_search(&search) {
            Ok(s) if !s.is_empty() => s,
            Ok(_) => {
                set_message.set(Some("A search tag is required!".to_string()));
                return;
            }
            Err(e) => {
                set_message.set(Some(e.to_string()));
                return;
            }
        };
        // empty replacement = bulk removal of the searched tag
        let replace = match validate_tags(&[replace]) {
            Ok(mut cleaned) => cleaned.pop().unwrap_or_default(),
            Err(e) => {
                set_message.set(Some(e.to_string()));
                return;
            }
        };
        let request = ApiRequest::SearchReplaceTags { search, replace };
        spawn_local(async move {
            match api::fetch_json::<ProcessReply>(api_base, &request, false).await {
                Ok(reply) => {
                    set_message.set(Some(reply.status));
                    set_meta.update(|m| m.cache_bust = true);
                    load_photos(false);
                }
                Err(e) => {
                    console::error!(format!("search-replace failed: {:?}", e));
                    set_message.set(Some(API_ERROR_MSG.to_string()));
                }
            }
        });
    };

    // ---- auth handlers ----

    let on_login = move |user: String, password: String| {
        let request = ApiRequest::Login {
            username: user.clone(),
            password,
        };
        spawn_local(async move {
            match api::fetch_json::<AuthStatus>(api_base, &request, false).await {
                Ok(status) if status.logged_in => {
                    set_session.update(|s| s.apply_login(user, &status));
                    set_message.set(None);
                    load_photos(false);
                }
                Ok(status) => {
                    let text = status.error.unwrap_or_else(|| "Login failed!".to_string());
                    set_message.set(Some(text));
                }
                Err(e) => {
                    console::error!(format!("login failed: {:?}", e));
                    set_message.set(Some(API_ERROR_MSG.to_string()));
                }
            }
        });
    };

    let on_logout = move |_: ()| {
        spawn_local(async move {
            if let Err(e) = api::fetch_json::<AuthStatus>(api_base, &ApiRequest::Logout, false).await
            {
                console::error!(format!("logout failed: {:?}", e));
            }
            // cleared client-side regardless: a dead server session must not
            // trap the user in a logged-in UI
            set_session.update(|s| s.clear());
            set_photos.set(Vec::new());
            set_suggestions.set(None);
            set_message.set(None);
            set_meta.set(RecordMeta::new(page_size));
        });
    };

    let on_change_password = move |old_password: String, new_password: String| {
        let request = ApiRequest::ChangePassword {
            username: session.get_untracked().username,
            old_password,
            new_password,
        };
        spawn_local(async move {
            match api::dispatch(api_base, &request, false).await {
                Ok(_) => set_message.set(Some("Password updated".to_string())),
                Err(e) => {
                    console::error!(format!("password change failed: {:?}", e));
                    set_message.set(Some(API_ERROR_MSG.to_string()));
                }
            }
        });
    };

    // speculative load: an existing session cookie logs the user straight in
    Effect::new(move |_| {
        load_photos(true);
    });

    view! {
        <div class=format!("container {}", theme_class)>
            <Header
                greeting=greeting
                logged_in=logged_in
                username=username
                on_login=on_login
                on_logout=on_logout
                on_change_password=on_change_password
            />

            <Message message=message on_dismiss=move |_: ()| set_message.set(None) />

            <Show
                when=move || logged_in.get()
                fallback=|| view! { <p class="text-muted">"Log in to view the photo catalogue"</p> }
            >
                <PhotoTable
                    photos=photos
                    meta=meta
                    is_admin=is_admin
                    suggestions=suggestions
                    on_search=on_search
                    on_order=on_order
                    on_add_tags=on_add_tags
                    on_pick_suggestion=on_pick_suggestion
                    on_remove_tag=on_remove_tag
                    on_rotate=on_rotate
                    on_suggest=on_suggest
                />

                <Pagination meta=meta on_page=on_page on_limit=on_limit />

                <Show when=move || is_admin.get()>
                    <AdminTools
                        on_process=on_process
                        on_prune=on_prune
                        on_search_replace=on_search_replace
                    />
                </Show>
            </Show>

            <Footer text=footer_text />
        </div>
    }
}
