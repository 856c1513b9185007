use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::components::favorite_button::FavoriteButton;
use crate::components::review_card::ReviewCard;
use crate::models::RemixDetails;
use crate::session::{CurrentUserContext, SessionActions};

#[component]
pub fn RemixDetailPage() -> impl IntoView {
    let params = use_params_map();
    let remix_id = Memo::new(move |_| {
        params.with(|p| p.get("remixId").and_then(|id| id.parse::<i64>().ok()))
    });

    let session = expect_context::<CurrentUserContext>();
    let actions = expect_context::<SessionActions>();

    let (details, set_details) = signal(None::<RemixDetails>);
    let (errors, set_errors) = signal(Vec::<String>::new());

    Effect::new(move |_| {
        let Some(id) = remix_id.get() else {
            set_details.set(None);
            return;
        };
        spawn_local(async move {
            match actions.api.get_value().get_remix_details(id).await {
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
                    .is_some_and(|d| d.remix_author == user.username)
            })
        })
    };

    view! {
        <div class="page remix-detail-page">
            <Alert texts=errors />
            {move || {
                details.get().map(|remix| {
                    let id = remix.id;
                    let is_favorite = Signal::derive(move || session.is_remix_favorite(id));
                    let on_toggle = Callback::new(move |_: ()| {
                        spawn_local(async move {
                            let favorited = session
                                .favorite_remix_ids
                                .with_untracked(|ids| ids.contains(&id));
                            let result = if favorited {
                                actions.remove_remix_from_favorites(id).await
                            } else {
                                actions.add_remix_to_favorites(id).await
                            };
                            if let Err(messages) = result {
                                set_errors.set(messages);
                            }
                        });
                    });
                    let image = (!remix.image_url.is_empty()).then(|| {
                        view! {
                            <img
                                class="detail-image"
                                src=remix.image_url.clone()
                                alt=remix.name.clone()
                            />
                        }
                    });
                    let latest_review = remix.most_recent_remix_review.clone();

                    view! {
                        <article class="detail">
                            <header class="detail-header">
                                <h2>{remix.name.clone()}</h2>
                                <p class="detail-byline">
                                    "by "
                                    <a href=format!("/users/{}/remixes", remix.remix_author)>
                                        {remix.remix_author.clone()}
                                    </a>
                                    ", a remix of "
                                    <a href=format!("/recipes/{}", remix.original_recipe_id)>
                                        {remix.original_recipe.clone()}
                                    </a>
                                </p>
                                <div class="detail-actions">
                                    <Show when=move || session.is_logged_in()>
                                        <FavoriteButton
                                            is_favorite=is_favorite
                                            on_toggle=on_toggle
                                        />
                                    </Show>
                                    <Show when=is_author>
                                        <a href=format!("/remixes/{id}/edit") class="btn btn-secondary">
                                            "Edit"
                                        </a>
                                    </Show>
                                </div>
                            </header>

                            {image}
                            <p class="detail-description">{remix.description.clone()}</p>
                            <section class="detail-section">
                                <h3>"Why Remix It?"</h3>
                                <p class="detail-text">{remix.purpose.clone()}</p>
                            </section>
                            <p class="detail-meta">
                                {format!(
                                    "Cooking time: {} min. Serves {}.",
                                    remix.cooking_time, remix.servings
                                )}
                            </p>

                            <section class="detail-section">
                                <h3>"Ingredients"</h3>
                                <p class="detail-text">{remix.ingredients.clone()}</p>
                            </section>
                            <section class="detail-section">
                                <h3>"Directions"</h3>
                                <p class="detail-text">{remix.directions.clone()}</p>
                            </section>

                            <section class="detail-section">
                                <div class="section-header">
                                    <h3>"Latest Review"</h3>
                                    <a href=format!("/remixes/{id}/reviews")>"See all"</a>
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
                                        href=format!("/remixes/{id}/reviews/new")
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
