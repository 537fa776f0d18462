//! Top bar showing the app title, the signed-in user, and logout.

use leptos::prelude::*;

use crate::state::AppCtx;
use crate::util::storage;

/// Page header.
///
/// Shows the signed-in user's name and role badge. Logout drops both storage
/// keys and navigates to `/login` via `window.location` for a clean state.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    let user_name = move || {
        ctx.auth
            .get()
            .user
            .map_or_else(String::new, |u| u.name)
    };
    let role_badge = move || {
        ctx.auth
            .get()
            .role()
            .map_or("", |r| if r == crate::net::types::Role::Admin { "Admin" } else { "Surveyor" })
    };

    let on_logout = move |_| {
        storage::clear_all();
        #[cfg(feature = "browser")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="header">
            <span class="header__title">"Canopy"</span>
            <nav class="header__nav">
                <Show when=move || ctx.auth.get().is_admin()>
                    <a href="/">"Projects"</a>
                </Show>
                <Show when=move || {
                    ctx.auth.get().role() == Some(crate::net::types::Role::Surveyor)
                }>
                    <a href="/survey">"My Points"</a>
                </Show>
            </nav>
            <span class="header__spacer"></span>
            <span class="header__role">{role_badge}</span>
            <span class="header__user">{user_name}</span>
            <button class="btn header__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
