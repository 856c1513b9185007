use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::CurrentUserContext;

/// Renders its children only for a logged-in user; anyone else is sent to the
/// login page. The application shell keeps the whole route tree unmounted
/// until the session is restored, so a page refresh never bounces a valid
/// user through here while their profile is still in flight.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<CurrentUserContext>();

    view! {
        <Show
            when=move || session.is_logged_in()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
