//! Transient status banner component

use leptos::prelude::*;

#[component]
pub fn Message<FD>(message: ReadSignal<Option<String>>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || message.get().is_some()>
            <div class="message-banner">
                <span>{move || message.get().unwrap_or_default()}</span>
                <button
                    class="btn btn-small btn-tertiary"
                    on:click={
                        let on_dismiss = on_dismiss.clone();
                        move |_| on_dismiss(())
                    }
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
