use leptos::prelude::*;

use crate::components::recipe_card::RecipeCard;
use crate::models::RecipeSummary;

#[component]
pub fn RecipeList(#[prop(into)] recipes: Signal<Vec<RecipeSummary>>) -> impl IntoView {
    view! {
        <Show
            when=move || !recipes.with(|r| r.is_empty())
            fallback=|| view! { <p class="empty-list">"No recipes yet."</p> }
        >
            <div class="card-grid">
                <For
                    each=move || recipes.get()
                    key=|recipe| recipe.id
                    children=|recipe| view! { <RecipeCard recipe=recipe /> }
                />
            </div>
        </Show>
    }
}
