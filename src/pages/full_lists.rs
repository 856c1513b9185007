use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::components::remix_list::RemixList;
use crate::components::review_list::ReviewList;
use crate::models::{RemixSummary, ReviewDetails};
use crate::session::SessionActions;

/// Every remix of one recipe, past the 3-entry preview the detail page shows.
#[component]
pub fn RecipeRemixListPage() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = Memo::new(move |_| {
        params.with(|p| p.get("recipeId").and_then(|id| id.parse::<i64>().ok()))
    });
    let actions = expect_context::<SessionActions>();

    let (remixes, set_remixes) = signal(Vec::<RemixSummary>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(id) = recipe_id.get() else { return };
        set_loading.set(true);
        spawn_local(async move {
            match actions.api.get_value().get_all_recipe_remixes(id).await {
                Ok(list) => set_remixes.set(list),
                Err(err) => set_errors.set(err.into_messages()),
            }
            set_loading.set(false);
        });
    });

    let back_href = move || {
        recipe_id
            .get()
            .map(|id| format!("/recipes/{id}"))
            .unwrap_or_else(|| "/recipes".to_string())
    };

    view! {
        <div class="page full-list-page">
            <h2>"Remixes"</h2>
            <a href=back_href class="back-link">"Back to recipe"</a>
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

#[component]
pub fn RecipeReviewListPage() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = Memo::new(move |_| {
        params.with(|p| p.get("recipeId").and_then(|id| id.parse::<i64>().ok()))
    });
    let actions = expect_context::<SessionActions>();

    let (reviews, set_reviews) = signal(Vec::<ReviewDetails>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(id) = recipe_id.get() else { return };
        set_loading.set(true);
        spawn_local(async move {
            match actions.api.get_value().get_all_recipe_reviews(id).await {
                Ok(list) => set_reviews.set(list),
                Err(err) => set_errors.set(err.into_messages()),
            }
            set_loading.set(false);
        });
    });

    let back_href = move || {
        recipe_id
            .get()
            .map(|id| format!("/recipes/{id}"))
            .unwrap_or_else(|| "/recipes".to_string())
    };

    view! {
        <div class="page full-list-page">
            <h2>"Reviews"</h2>
            <a href=back_href class="back-link">"Back to recipe"</a>
            <Alert texts=errors />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ReviewList reviews=reviews />
            </Show>
        </div>
    }
}

#[component]
pub fn RemixReviewListPage() -> impl IntoView {
    let params = use_params_map();
    let remix_id = Memo::new(move |_| {
        params.with(|p| p.get("remixId").and_then(|id| id.parse::<i64>().ok()))
    });
    let actions = expect_context::<SessionActions>();

    let (reviews, set_reviews) = signal(Vec::<ReviewDetails>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(id) = remix_id.get() else { return };
        set_loading.set(true);
        spawn_local(async move {
            match actions.api.get_value().get_all_remix_reviews(id).await {
                Ok(list) => set_reviews.set(list),
                Err(err) => set_errors.set(err.into_messages()),
            }
            set_loading.set(false);
        });
    });

    let back_href = move || {
        remix_id
            .get()
            .map(|id| format!("/remixes/{id}"))
            .unwrap_or_else(|| "/recipes".to_string())
    };

    view! {
        <div class="page full-list-page">
            <h2>"Reviews"</h2>
            <a href=back_href class="back-link">"Back to remix"</a>
            <Alert texts=errors />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ReviewList reviews=reviews />
            </Show>
        </div>
    }
}
