use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::models::RemixFormDraft;
use crate::session::SessionActions;

/// Remixing starts from a copy: the form comes up prefilled with the original
/// recipe's fields and a blank purpose, and the remixer edits from there.
#[component]
pub fn NewRemixPage() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = Memo::new(move |_| {
        params.with(|p| p.get("recipeId").and_then(|id| id.parse::<i64>().ok()))
    });

    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let draft = RwSignal::new(RemixFormDraft::default());
    let (original_name, set_original_name) = signal(String::new());
    let (loaded, set_loaded) = signal(false);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let Some(id) = recipe_id.get() else { return };
        set_loaded.set(false);
        spawn_local(async move {
            match actions.api.get_value().get_recipe_details(id).await {
                Ok(details) => {
                    set_original_name.set(details.name.clone());
                    draft.set(RemixFormDraft::from_original_recipe(&details));
                    set_loaded.set(true);
                }
                Err(err) => set_errors.set(err.into_messages()),
            }
        });
    });

    view! {
        <div class="page remix-form-page">
            <h2>{move || format!("Remix {}", original_name.get())}</h2>
            <Alert texts=errors />
            {move || {
                if !loaded.get() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                let navigate = navigate.clone();
                view! {
                    <form
                        class="remix-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let Some(id) = recipe_id.get_untracked() else { return };
                            let navigate = navigate.clone();
                            set_submitting.set(true);
                            spawn_local(async move {
                                match actions.add_remix(id, draft.get_untracked()).await {
                                    Ok(new_id) => {
                                        set_submitting.set(false);
                                        navigate(
                                            &format!("/remixes/{new_id}"),
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
                        <RemixFormFields draft=draft />
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Saving..." } else { "Create Remix" }}
                        </button>
                    </form>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn EditRemixPage() -> impl IntoView {
    let params = use_params_map();
    let remix_id = Memo::new(move |_| {
        params.with(|p| p.get("remixId").and_then(|id| id.parse::<i64>().ok()))
    });

    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let draft = RwSignal::new(RemixFormDraft::default());
    let (loaded, set_loaded) = signal(false);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let Some(id) = remix_id.get() else { return };
        set_loaded.set(false);
        spawn_local(async move {
            match actions.api.get_value().get_remix_details(id).await {
                Ok(details) => {
                    draft.set(RemixFormDraft::from_details(&details));
                    set_loaded.set(true);
                }
                Err(err) => set_errors.set(err.into_messages()),
            }
        });
    });

    view! {
        <div class="page remix-form-page">
            <h2>"Edit Remix"</h2>
            <Alert texts=errors />
            {move || {
                if !loaded.get() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                let navigate = navigate.clone();
                view! {
                    <form
                        class="remix-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let Some(id) = remix_id.get_untracked() else { return };
                            let navigate = navigate.clone();
                            set_submitting.set(true);
                            spawn_local(async move {
                                match actions.edit_remix(id, draft.get_untracked()).await {
                                    Ok(updated_id) => {
                                        set_submitting.set(false);
                                        navigate(
                                            &format!("/remixes/{updated_id}"),
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
                        <RemixFormFields draft=draft />
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

#[component]
fn RemixFormFields(draft: RwSignal<RemixFormDraft>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="remix-name">"Name"</label>
            <input
                id="remix-name"
                type="text"
                class="input"
                required
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for="remix-description">"Description"</label>
            <textarea
                id="remix-description"
                class="input"
                required
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-group">
            <label for="remix-purpose">"Why remix it?"</label>
            <textarea
                id="remix-purpose"
                class="input"
                required
                prop:value=move || draft.with(|d| d.purpose.clone())
                on:input=move |ev| draft.update(|d| d.purpose = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-group">
            <label for="remix-ingredients">"Ingredients"</label>
            <textarea
                id="remix-ingredients"
                class="input"
                required
                prop:value=move || draft.with(|d| d.ingredients.clone())
                on:input=move |ev| draft.update(|d| d.ingredients = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-group">
            <label for="remix-directions">"Directions"</label>
            <textarea
                id="remix-directions"
                class="input"
                required
                prop:value=move || draft.with(|d| d.directions.clone())
                on:input=move |ev| draft.update(|d| d.directions = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-row">
            <div class="form-group">
                <label for="remix-cooking-time">"Cooking Time (minutes)"</label>
                <input
                    id="remix-cooking-time"
                    type="number"
                    min="0"
                    class="input"
                    prop:value=move || draft.with(|d| d.cooking_time.clone())
                    on:input=move |ev| draft.update(|d| d.cooking_time = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="remix-servings">"Servings"</label>
                <input
                    id="remix-servings"
                    type="number"
                    min="0"
                    class="input"
                    prop:value=move || draft.with(|d| d.servings.clone())
                    on:input=move |ev| draft.update(|d| d.servings = event_target_value(&ev))
                />
            </div>
        </div>
        <div class="form-group">
            <label for="remix-image-url">"Image URL"</label>
            <input
                id="remix-image-url"
                type="url"
                class="input"
                prop:value=move || draft.with(|d| d.image_url.clone())
                on:input=move |ev| draft.update(|d| d.image_url = event_target_value(&ev))
            />
        </div>
    }
}
