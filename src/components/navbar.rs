use leptos::prelude::*;

use crate::session::{CurrentUserContext, SessionActions};

#[component]
pub fn RemixNavbar() -> impl IntoView {
    let session = expect_context::<CurrentUserContext>();
    let actions = expect_context::<SessionActions>();

    let username = move || {
        session
            .current_user
            .with(|user| user.as_ref().map(|u| u.username.clone()).unwrap_or_default())
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">"Remix"</a>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/recipes" class="nav-link">"Recipes"</a>
                </li>
                <Show
                    when=move || session.is_logged_in()
                    fallback=|| view! {
                        <li class="nav-item">
                            <a href="/login" class="nav-link">"Log In"</a>
                        </li>
                        <li class="nav-item">
                            <a href="/signup" class="nav-link">"Sign Up"</a>
                        </li>
                    }
                >
                    <li class="nav-item">
                        <a href="/recipes/new" class="nav-link">"New Recipe"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/profile" class="nav-link">{username}</a>
                    </li>
                    <li class="nav-item">
                        <button
                            class="nav-link nav-logout"
                            on:click=move |_| actions.logout()
                        >
                            "Log Out"
                        </button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}
