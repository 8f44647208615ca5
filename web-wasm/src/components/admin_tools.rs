//! Admin toolbar: server-side batch jobs and search-and-replace
//!
//! Every button here only *requests* work; the backend queues the job and
//! answers 202 immediately, so the UI shows the acknowledgement text rather
//! than a completion state.

use leptos::prelude::*;
use spm_common::ProcessAction;

#[component]
pub fn AdminTools<FP, FU, FS>(on_process: FP, on_prune: FU, on_search_replace: FS) -> impl IntoView
where
    FP: Fn(ProcessAction) + 'static + Clone + Send + Sync,
    FU: Fn(()) + 'static + Clone + Send + Sync,
    FS: Fn(String, String) + 'static + Clone + Send + Sync,
{
    let (sr_search, set_sr_search) = signal(String::new());
    let (sr_replace, set_sr_replace) = signal(String::new());

    let job_button = {
        let on_process = on_process.clone();
        move |label: &'static str, title: &'static str, action: ProcessAction| {
            let on_process = on_process.clone();
            view! {
                <button
                    class="btn btn-secondary"
                    title=title
                    on:click=move |_| on_process(action)
                >
                    {label}
                </button>
            }
        }
    };

    view! {
        <div class="admin-tools">
            <h3>"Administration"</h3>

            <div class="job-buttons">
                {job_button(
                    "Scan for new photos",
                    "Scan origin directories, create web copies and read IPTC tags",
                    ProcessAction::Scan,
                )}
                {job_button(
                    "Retag processed photos",
                    "Re-copy tags from origin images onto processed copies",
                    ProcessAction::Retag,
                )}
                {job_button(
                    "Clean database",
                    "Remove records for images deleted from the origin directories",
                    ProcessAction::CleanDb,
                )}
                <button
                    class="btn btn-secondary"
                    title="Delete tags no longer used by any record"
                    on:click={
                        let on_prune = on_prune.clone();
                        move |_| on_prune(())
                    }
                >
                    "Prune unused tags"
                </button>
            </div>

            <div class="search-replace">
                <h4>"Search & replace tags"</h4>
                <input
                    type="text"
                    id="sr-search"
                    placeholder="Tag to find"
                    prop:value=move || sr_search.get()
                    on:input=move |ev| {
                        set_sr_search.set(event_target_value(&ev));
                    }
                />
                <input
                    type="text"
                    id="sr-replace"
                    placeholder="Replacement (leave empty to remove)"
                    prop:value=move || sr_replace.get()
                    on:input=move |ev| {
                        set_sr_replace.set(event_target_value(&ev));
                    }
                />
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_search_replace = on_search_replace.clone();
                        move |_| on_search_replace(sr_search.get(), sr_replace.get())
                    }
                >
                    {move || {
                        if sr_replace.get().trim().is_empty() {
                            "Remove everywhere"
                        } else {
                            "Replace everywhere"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
