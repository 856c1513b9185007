use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::components::recipe_list::RecipeList;
use crate::components::remix_list::RemixList;
use crate::components::review_card::ReviewCard;
use crate::models::{RecipeSummary, RemixSummary, UserRecipeReview, UserRemixReview};
use crate::session::{CurrentUserContext, SessionActions};

fn route_username(params: &leptos_router::params::ParamsMap) -> String {
    params.get("username").unwrap_or_default()
}

#[component]
pub fn UserRecipesPage() -> impl IntoView {
    let params = use_params_map();
    let username = Memo::new(move |_| params.with(route_username));
    let actions = expect_context::<SessionActions>();

    let (recipes, set_recipes) = signal(Vec::<RecipeSummary>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let username = username.get();
        if username.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match actions.api.get_value().get_users_recipes(&username).await {
                Ok(list) => set_recipes.set(list),
                Err(err) => set_errors.set(err.into_messages()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page user-list-page">
            <h2>{move || format!("Recipes by {}", username.get())}</h2>
            <Alert texts=errors />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <RecipeList recipes=recipes />
            </Show>
        </div>
    }
}

#[component]
pub fn UserRemixesPage() -> impl IntoView {
    let params = use_params_map();
    let username = Memo::new(move |_| params.with(route_username));
    let actions = expect_context::<SessionActions>();

    let (remixes, set_remixes) = signal(Vec::<RemixSummary>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let username = username.get();
        if username.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match actions.api.get_value().get_users_remixes(&username).await {
                Ok(list) => set_remixes.set(list),
                Err(err) => set_errors.set(err.into_messages()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page user-list-page">
            <h2>{move || format!("Remixes by {}", username.get())}</h2>
            <Alert texts=errors />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <RemixList remixes=remixes />
            </Show>
        </div>
    }
}

/// Edit links appear only when the viewer is looking at their own reviews.
fn viewing_own_list(session: &CurrentUserContext, username: &str) -> bool {
    session
        .current_user
        .with(|user| user.as_ref().is_some_and(|u| u.username == username))
}

#[component]
pub fn UserRecipeReviewsPage() -> impl IntoView {
    let params = use_params_map();
    let username = Memo::new(move |_| params.with(route_username));
    let session = expect_context::<CurrentUserContext>();
    let actions = expect_context::<SessionActions>();

    let (reviews, set_reviews) = signal(Vec::<UserRecipeReview>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let username = username.get();
        if username.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match actions
                .api
                .get_value()
                .get_users_recipe_reviews(&username)
                .await
            {
                Ok(list) => set_reviews.set(list),
                Err(err) => set_errors.set(err.into_messages()),
            }
            set_loading.set(false);
        });
    });

    let own_list = move || viewing_own_list(&session, &username.get());

    view! {
        <div class="page user-list-page">
            <h2>{move || format!("Recipe reviews by {}", username.get())}</h2>
            <Alert texts=errors />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <Show
                    when=move || !reviews.with(|r| r.is_empty())
                    fallback=|| view! { <p class="empty-list">"No reviews yet."</p> }
                >
                    <div class="review-stack">
                        <For
                            each=move || reviews.get()
                            key=|review| review.id
                            children=move |review| {
                                let edit_href = own_list()
                                    .then(|| format!("/reviews/recipes/{}/edit", review.id));
                                view! {
                                    <ReviewCard
                                        subject=format!("Review of {}", review.recipe_name)
                                        title=review.title
                                        content=review.content
                                        edit_href=edit_href
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
pub fn UserRemixReviewsPage() -> impl IntoView {
    let params = use_params_map();
    let username = Memo::new(move |_| params.with(route_username));
    let session = expect_context::<CurrentUserContext>();
    let actions = expect_context::<SessionActions>();

    let (reviews, set_reviews) = signal(Vec::<UserRemixReview>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let username = username.get();
        if username.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match actions
                .api
                .get_value()
                .get_users_remix_reviews(&username)
                .await
            {
                Ok(list) => set_reviews.set(list),
                Err(err) => set_errors.set(err.into_messages()),
            }
            set_loading.set(false);
        });
    });

    let own_list = move || viewing_own_list(&session, &username.get());

    view! {
        <div class="page user-list-page">
            <h2>{move || format!("Remix reviews by {}", username.get())}</h2>
            <Alert texts=errors />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <Show
                    when=move || !reviews.with(|r| r.is_empty())
                    fallback=|| view! { <p class="empty-list">"No reviews yet."</p> }
                >
                    <div class="review-stack">
                        <For
                            each=move || reviews.get()
                            key=|review| review.id
                            children=move |review| {
                                let edit_href = own_list()
                                    .then(|| format!("/reviews/remixes/{}/edit", review.id));
                                view! {
                                    <ReviewCard
                                        subject=format!("Review of {}", review.remix_name)
                                        title=review.title
                                        content=review.content
                                        edit_href=edit_href
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
