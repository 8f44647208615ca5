//! Footer component

use leptos::prelude::*;

#[component]
pub fn Footer(text: &'static str) -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="text-muted">{text}</p>
        </footer>
    }
}
