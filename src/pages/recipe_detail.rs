use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::components::favorite_button::FavoriteButton;
use crate::components::remix_list::RemixList;
use crate::components::review_card::ReviewCard;
use crate::models::RecipeDetails;
use crate::session::{CurrentUserContext, SessionActions};

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = Memo::new(move |_| {
        params.with(|p| p.get("recipeId").and_then(|id| id.parse::<i64>().ok()))
    });

    let session = expect_context::<CurrentUserContext>();
    let actions = expect_context::<SessionActions>();

    let (details, set_details) = signal(None::<RecipeDetails>);
    let (errors, set_errors) = signal(Vec::<String>::new());

    Effect::new(move |_| {
        let Some(id) = recipe_id.get() else {
            set_details.set(None);
            return;
        };
        spawn_local(async move {
            match actions.api.get_value().get_recipe_details(id).await {
                Ok(fetched) => set_details.set(Some(fetched)),
                Err(err) => set_errors.set(err.into_messages()),
            }
        });
    });

    let is_author = move || {
        session.current_user.with(|user| {
            let Some(user) = user else { return false };
            details.with(|d| {
                d.as_ref()
                    .is_some_and(|d| d.recipe_author == user.username)
            })
        })
    };

    view! {
        <div class="page recipe-detail-page">
            <Alert texts=errors />
            {move || {
                details.get().map(|recipe| {
                    let id = recipe.id;
                    let is_favorite = Signal::derive(move || session.is_recipe_favorite(id));
                    let on_toggle = Callback::new(move |_: ()| {
                        spawn_local(async move {
                            let favorited = session
                                .favorite_recipe_ids
                                .with_untracked(|ids| ids.contains(&id));
                            let result = if favorited {
                                actions.remove_recipe_from_favorites(id).await
                            } else {
                                actions.add_recipe_to_favorites(id).await
                            };
                            if let Err(messages) = result {
                                set_errors.set(messages);
                            }
                        });
                    });
                    let image = (!recipe.image_url.is_empty()).then(|| {
                        view! {
                            <img
                                class="detail-image"
                                src=recipe.image_url.clone()
                                alt=recipe.name.clone()
                            />
                        }
                    });
                    let remixes = recipe.remixes.clone();
                    let latest_review = recipe.most_recent_recipe_review.clone();

                    view! {
                        <article class="detail">
                            <header class="detail-header">
                                <h2>{recipe.name.clone()}</h2>
                                <p class="detail-byline">
                                    "by "
                                    <a href=format!("/users/{}/recipes", recipe.recipe_author)>
                                        {recipe.recipe_author.clone()}
                                    </a>
                                </p>
                                <div class="detail-actions">
                                    <Show when=move || session.is_logged_in()>
                                        <FavoriteButton
                                            is_favorite=is_favorite
                                            on_toggle=on_toggle
                                        />
                                        <a
                                            href=format!("/recipes/{id}/remixes/new")
                                            class="btn btn-secondary"
                                        >
                                            "Remix This Recipe"
                                        </a>
                                    </Show>
                                    <Show when=is_author>
                                        <a href=format!("/recipes/{id}/edit") class="btn btn-secondary">
                                            "Edit"
                                        </a>
                                    </Show>
                                </div>
                            </header>

                            {image}
                            <p class="detail-description">{recipe.description.clone()}</p>
                            <p class="detail-meta">
                                {format!(
                                    "Cooking time: {} min. Serves {}.",
                                    recipe.cooking_time, recipe.servings
                                )}
                            </p>

                            <section class="detail-section">
                                <h3>"Ingredients"</h3>
                                <p class="detail-text">{recipe.ingredients.clone()}</p>
                            </section>
                            <section class="detail-section">
                                <h3>"Directions"</h3>
                                <p class="detail-text">{recipe.directions.clone()}</p>
                            </section>

                            <section class="detail-section">
                                <div class="section-header">
                                    <h3>"Newest Remixes"</h3>
                                    <a href=format!("/recipes/{id}/remixes")>"See all"</a>
                                </div>
                                <RemixList remixes=Signal::derive(move || remixes.clone()) />
                            </section>

                            <section class="detail-section">
                                <div class="section-header">
                                    <h3>"Latest Review"</h3>
                                    <a href=format!("/recipes/{id}/reviews")>"See all"</a>
                                </div>
                                {latest_review.map(|review| view! {
                                    <ReviewCard
                                        title=review.title
                                        content=review.content
                                        author=review.review_author
                                    />
                                })}
                                <Show when=move || session.is_logged_in()>
                                    <a
                                        href=format!("/recipes/{id}/reviews/new")
                                        class="btn btn-secondary"
                                    >
                                        "Write a Review"
                                    </a>
                                </Show>
                            </section>
                        </article>
                    }
                })
            }}
        </div>
    }
}
