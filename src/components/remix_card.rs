use leptos::prelude::*;

use crate::models::RemixSummary;

#[component]
pub fn RemixCard(remix: RemixSummary) -> impl IntoView {
    let href = format!("/remixes/{}", remix.id);
    let image = (!remix.image_url.is_empty()).then(|| {
        view! {
            <img class="card-image" src=remix.image_url.clone() alt=remix.name.clone() />
        }
    });
    let original = remix.original_recipe.clone().map(|name| {
        view! {
            <p class="card-subtext">{format!("Remix of {name}")}</p>
        }
    });

    view! {
        <a href=href class="card remix-card">
            {image}
            <div class="card-body">
                <h3 class="card-title">{remix.name}</h3>
                {original}
                <p class="card-text">{remix.description}</p>
            </div>
        </a>
    }
}
