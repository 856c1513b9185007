use leptos::prelude::*;

use crate::components::remix_card::RemixCard;
use crate::models::RemixSummary;

#[component]
pub fn RemixList(#[prop(into)] remixes: Signal<Vec<RemixSummary>>) -> impl IntoView {
    view! {
        <Show
            when=move || !remixes.with(|r| r.is_empty())
            fallback=|| view! { <p class="empty-list">"No remixes yet."</p> }
        >
            <div class="card-grid">
                <For
                    each=move || remixes.get()
                    key=|remix| remix.id
                    children=|remix| view! { <RemixCard remix=remix /> }
                />
            </div>
        </Show>
    }
}
