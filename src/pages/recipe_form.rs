use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::models::RecipeFormDraft;
use crate::session::SessionActions;

#[component]
pub fn NewRecipePage() -> impl IntoView {
    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let draft = RwSignal::new(RecipeFormDraft::default());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    view! {
        <div class="page recipe-form-page">
            <h2>"New Recipe"</h2>
            <Alert texts=errors />
            <form
                class="recipe-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let navigate = navigate.clone();
                    set_submitting.set(true);
                    spawn_local(async move {
                        match actions.add_recipe(draft.get_untracked()).await {
                            Ok(new_id) => {
                                set_submitting.set(false);
                                navigate(&format!("/recipes/{new_id}"), NavigateOptions::default());
                            }
                            Err(messages) => {
                                set_errors.set(messages);
                                set_submitting.set(false);
                            }
                        }
                    });
                }
            >
                <RecipeFormFields draft=draft />
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Create Recipe" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn EditRecipePage() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = Memo::new(move |_| {
        params.with(|p| p.get("recipeId").and_then(|id| id.parse::<i64>().ok()))
    });

    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let draft = RwSignal::new(RecipeFormDraft::default());
    let (loaded, set_loaded) = signal(false);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let Some(id) = recipe_id.get() else { return };
        set_loaded.set(false);
        spawn_local(async move {
            match actions.api.get_value().get_recipe_details(id).await {
                Ok(details) => {
                    draft.set(RecipeFormDraft::from_details(&details));
                    set_loaded.set(true);
                }
                Err(err) => set_errors.set(err.into_messages()),
            }
        });
    });

    view! {
        <div class="page recipe-form-page">
            <h2>"Edit Recipe"</h2>
            <Alert texts=errors />
            {move || {
                if !loaded.get() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                let navigate = navigate.clone();
                view! {
                    <form
                        class="recipe-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let Some(id) = recipe_id.get_untracked() else { return };
                            let navigate = navigate.clone();
                            set_submitting.set(true);
                            spawn_local(async move {
                                match actions.edit_recipe(id, draft.get_untracked()).await {
                                    Ok(updated_id) => {
                                        set_submitting.set(false);
                                        navigate(
                                            &format!("/recipes/{updated_id}"),
                                            NavigateOptions::default(),
                                        );
                                    }
                                    Err(messages) => {
                                        set_errors.set(messages);
                                        set_submitting.set(false);
                                    }
                                }
                            });
                        }
                    >
                        <RecipeFormFields draft=draft />
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </form>
                }
                .into_any()
            }}
        </div>
    }
}

/// Inputs shared by the create and edit forms, all bound to one draft.
#[component]
fn RecipeFormFields(draft: RwSignal<RecipeFormDraft>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="recipe-name">"Name"</label>
            <input
                id="recipe-name"
                type="text"
                class="input"
                required
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for="recipe-description">"Description"</label>
            <textarea
                id="recipe-description"
                class="input"
                required
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-group">
            <label for="recipe-ingredients">"Ingredients"</label>
            <textarea
                id="recipe-ingredients"
                class="input"
                required
                prop:value=move || draft.with(|d| d.ingredients.clone())
                on:input=move |ev| draft.update(|d| d.ingredients = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-group">
            <label for="recipe-directions">"Directions"</label>
            <textarea
                id="recipe-directions"
                class="input"
                required
                prop:value=move || draft.with(|d| d.directions.clone())
                on:input=move |ev| draft.update(|d| d.directions = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-row">
            <div class="form-group">
                <label for="recipe-cooking-time">"Cooking Time (minutes)"</label>
                <input
                    id="recipe-cooking-time"
                    type="number"
                    min="0"
                    class="input"
                    prop:value=move || draft.with(|d| d.cooking_time.clone())
                    on:input=move |ev| draft.update(|d| d.cooking_time = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="recipe-servings">"Servings"</label>
                <input
                    id="recipe-servings"
                    type="number"
                    min="0"
                    class="input"
                    prop:value=move || draft.with(|d| d.servings.clone())
                    on:input=move |ev| draft.update(|d| d.servings = event_target_value(&ev))
                />
            </div>
        </div>
        <div class="form-group">
            <label for="recipe-image-url">"Image URL"</label>
            <input
                id="recipe-image-url"
                type="url"
                class="input"
                prop:value=move || draft.with(|d| d.image_url.clone())
                on:input=move |ev| draft.update(|d| d.image_url = event_target_value(&ev))
            />
        </div>
    }
}
