//! Header component: greeting, login form, logout and password change

use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Header<FL, FO, FP>(
    greeting: &'static str,
    logged_in: Signal<bool>,
    username: Signal<String>,
    on_login: FL,
    on_logout: FO,
    on_change_password: FP,
) -> impl IntoView
where
    FL: Fn(String, String) + 'static + Clone + Send + Sync,
    FO: Fn(()) + 'static + Clone + Send + Sync,
    FP: Fn(String, String) + 'static + Clone + Send + Sync,
{
    let (login_user, set_login_user) = signal(String::new());
    let (login_pass, set_login_pass) = signal(String::new());
    let (show_password_form, set_show_password_form) = signal(false);
    let (old_pass, set_old_pass) = signal(String::new());
    let (new_pass, set_new_pass) = signal(String::new());
    let (confirm_pass, set_confirm_pass) = signal(String::new());
    let (local_error, set_local_error) = signal(None::<&'static str>);

    // Stored so the submit handlers below are Copy and can be captured by
    // every nested view closure without hand-threading clones.
    let on_login = StoredValue::new(on_login);
    let on_logout = StoredValue::new(on_logout);
    let on_change_password = StoredValue::new(on_change_password);

    let submit_login = move |_: MouseEvent| {
        let user = login_user.get();
        let pass = login_pass.get();
        if user.is_empty() || pass.is_empty() {
            set_local_error.set(Some("Username and password are required"));
            return;
        }
        set_local_error.set(None);
        set_login_pass.set(String::new());
        on_login.with_value(|f| f(user, pass));
    };

    let submit_password = move |_: MouseEvent| {
        let old = old_pass.get();
        let new = new_pass.get();
        if new.is_empty() || new != confirm_pass.get() {
            set_local_error.set(Some("New passwords do not match"));
            return;
        }
        set_local_error.set(None);
        set_old_pass.set(String::new());
        set_new_pass.set(String::new());
        set_confirm_pass.set(String::new());
        set_show_password_form.set(false);
        on_change_password.with_value(|f| f(old, new));
    };

    view! {
        <header class="header">
            <h1>{greeting}</h1>

            <Show
                when=move || logged_in.get()
                fallback=move || {
                    view! {
                        <div class="login-form">
                            <input
                                type="text"
                                id="login-username"
                                placeholder="Username"
                                prop:value=move || login_user.get()
                                on:input=move |ev| {
                                    set_login_user.set(event_target_value(&ev));
                                }
                            />
                            <input
                                type="password"
                                id="login-password"
                                placeholder="Password"
                                prop:value=move || login_pass.get()
                                on:input=move |ev| {
                                    set_login_pass.set(event_target_value(&ev));
                                }
                            />
                            <button class="btn btn-primary" on:click=submit_login>
                                "Log in"
                            </button>
                        </div>
                    }
                }
            >
                <div class="session-bar">
                    <span class="session-user">{move || username.get()}</span>
                    <button
                        class="btn btn-secondary btn-small"
                        on:click=move |_| set_show_password_form.update(|v| *v = !*v)
                    >
                        "Change password"
                    </button>
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click=move |_| on_logout.with_value(|f| f(()))
                    >
                        "Log out"
                    </button>
                </div>

                <Show when=move || show_password_form.get()>
                    <div class="password-form">
                        <input
                            type="password"
                            placeholder="Current password"
                            prop:value=move || old_pass.get()
                            on:input=move |ev| {
                                set_old_pass.set(event_target_value(&ev));
                            }
                        />
                        <input
                            type="password"
                            placeholder="New password"
                            prop:value=move || new_pass.get()
                            on:input=move |ev| {
                                set_new_pass.set(event_target_value(&ev));
                            }
                        />
                        <input
                            type="password"
                            placeholder="Confirm new password"
                            prop:value=move || confirm_pass.get()
                            on:input=move |ev| {
                                set_confirm_pass.set(event_target_value(&ev));
                            }
                        />
                        <button class="btn btn-primary btn-small" on:click=submit_password>
                            "Update"
                        </button>
                    </div>
                </Show>
            </Show>

            <Show when=move || local_error.get().is_some()>
                <p class="form-error">{move || local_error.get().unwrap_or_default()}</p>
            </Show>
        </header>
    }
}
