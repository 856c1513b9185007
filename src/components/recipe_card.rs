use leptos::prelude::*;

use crate::models::RecipeSummary;

#[component]
pub fn RecipeCard(recipe: RecipeSummary) -> impl IntoView {
    let href = format!("/recipes/{}", recipe.id);
    let image = (!recipe.image_url.is_empty()).then(|| {
        view! {
            <img class="card-image" src=recipe.image_url.clone() alt=recipe.name.clone() />
        }
    });

    view! {
        <a href=href class="card recipe-card">
            {image}
            <div class="card-body">
                <h3 class="card-title">{recipe.name}</h3>
                <p class="card-text">{recipe.description}</p>
            </div>
        </a>
    }
}
