//! Login page with email/password form.

use leptos::prelude::*;

use crate::net::api;
use crate::state::AppCtx;
use crate::util::storage;

/// Login page. On success the profile is persisted and the user lands on
/// the page for their role.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(response) => {
                    storage::write_user(&response.user);
                    let target = match response.user.role {
                        crate::net::types::Role::Admin => "/",
                        crate::net::types::Role::Surveyor => "/survey",
                    };
                    ctx.auth.update(|a| a.user = Some(response.user));
                    #[cfg(feature = "browser")]
                    {
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href(target);
                        }
                    }
                    #[cfg(not(feature = "browser"))]
                    let _ = target;
                }
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Canopy"</h1>
            <p>"Field survey platform"</p>

            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="login-page__error">{message}</p> })
                }}

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
