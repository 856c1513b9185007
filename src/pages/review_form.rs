use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::models::ReviewFormData;
use crate::session::{CurrentUserContext, SessionActions};

#[component]
pub fn NewRecipeReviewPage() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = Memo::new(move |_| {
        params.with(|p| p.get("recipeId").and_then(|id| id.parse::<i64>().ok()))
    });

    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let draft = RwSignal::new(ReviewFormData::default());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    view! {
        <div class="page review-form-page">
            <h2>"Write a Review"</h2>
            <Alert texts=errors />
            <form
                class="review-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let Some(id) = recipe_id.get_untracked() else { return };
                    let navigate = navigate.clone();
                    set_submitting.set(true);
                    spawn_local(async move {
                        match actions.add_recipe_review(id, draft.get_untracked()).await {
                            Ok(()) => {
                                set_submitting.set(false);
                                navigate(&format!("/recipes/{id}"), NavigateOptions::default());
                            }
                            Err(messages) => {
                                set_errors.set(messages);
                                set_submitting.set(false);
                            }
                        }
                    });
                }
            >
                <ReviewFormFields draft=draft />
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Post Review" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn NewRemixReviewPage() -> impl IntoView {
    let params = use_params_map();
    let remix_id = Memo::new(move |_| {
        params.with(|p| p.get("remixId").and_then(|id| id.parse::<i64>().ok()))
    });

    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let draft = RwSignal::new(ReviewFormData::default());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    view! {
        <div class="page review-form-page">
            <h2>"Write a Review"</h2>
            <Alert texts=errors />
            <form
                class="review-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let Some(id) = remix_id.get_untracked() else { return };
                    let navigate = navigate.clone();
                    set_submitting.set(true);
                    spawn_local(async move {
                        match actions.add_remix_review(id, draft.get_untracked()).await {
                            Ok(()) => {
                                set_submitting.set(false);
                                navigate(&format!("/remixes/{id}"), NavigateOptions::default());
                            }
                            Err(messages) => {
                                set_errors.set(messages);
                                set_submitting.set(false);
                            }
                        }
                    });
                }
            >
                <ReviewFormFields draft=draft />
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Post Review" }}
                </button>
            </form>
        </div>
    }
}

/// Editing prefills from the user's own review list, which is also how the
/// page learns which recipe to return to after saving. There is no
/// single-review endpoint.
#[component]
pub fn EditRecipeReviewPage() -> impl IntoView {
    let params = use_params_map();
    let review_id = Memo::new(move |_| {
        params.with(|p| p.get("reviewId").and_then(|id| id.parse::<i64>().ok()))
    });

    let session = expect_context::<CurrentUserContext>();
    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let draft = RwSignal::new(ReviewFormData::default());
    let (subject_id, set_subject_id) = signal(None::<i64>);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let Some(id) = review_id.get() else { return };
        let Some(username) = session
            .current_user
            .with_untracked(|user| user.as_ref().map(|u| u.username.clone()))
        else {
            return;
        };
        spawn_local(async move {
            match actions.api.get_value().get_users_recipe_reviews(&username).await {
                Ok(reviews) => match reviews.into_iter().find(|r| r.id == id) {
                    Some(review) => {
                        draft.set(ReviewFormData {
                            title: review.title,
                            content: review.content,
                        });
                        set_subject_id.set(Some(review.recipe_id));
                    }
                    None => set_errors.set(vec!["Review not found.".to_string()]),
                },
                Err(err) => set_errors.set(err.into_messages()),
            }
        });
    });

    view! {
        <div class="page review-form-page">
            <h2>"Edit Review"</h2>
            <Alert texts=errors />
            {move || {
                let Some(recipe_id) = subject_id.get() else {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                };
                let navigate = navigate.clone();
                view! {
                    <form
                        class="review-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let Some(id) = review_id.get_untracked() else { return };
                            let navigate = navigate.clone();
                            set_submitting.set(true);
                            spawn_local(async move {
                                match actions.edit_recipe_review(id, draft.get_untracked()).await {
                                    Ok(()) => {
                                        set_submitting.set(false);
                                        navigate(
                                            &format!("/recipes/{recipe_id}"),
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
                        <ReviewFormFields draft=draft />
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
pub fn EditRemixReviewPage() -> impl IntoView {
    let params = use_params_map();
    let review_id = Memo::new(move |_| {
        params.with(|p| p.get("reviewId").and_then(|id| id.parse::<i64>().ok()))
    });

    let session = expect_context::<CurrentUserContext>();
    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let draft = RwSignal::new(ReviewFormData::default());
    let (subject_id, set_subject_id) = signal(None::<i64>);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let Some(id) = review_id.get() else { return };
        let Some(username) = session
            .current_user
            .with_untracked(|user| user.as_ref().map(|u| u.username.clone()))
        else {
            return;
        };
        spawn_local(async move {
            match actions.api.get_value().get_users_remix_reviews(&username).await {
                Ok(reviews) => match reviews.into_iter().find(|r| r.id == id) {
                    Some(review) => {
                        draft.set(ReviewFormData {
                            title: review.title,
                            content: review.content,
                        });
                        set_subject_id.set(Some(review.remix_id));
                    }
                    None => set_errors.set(vec!["Review not found.".to_string()]),
                },
                Err(err) => set_errors.set(err.into_messages()),
            }
        });
    });

    view! {
        <div class="page review-form-page">
            <h2>"Edit Review"</h2>
            <Alert texts=errors />
            {move || {
                let Some(remix_id) = subject_id.get() else {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                };
                let navigate = navigate.clone();
                view! {
                    <form
                        class="review-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let Some(id) = review_id.get_untracked() else { return };
                            let navigate = navigate.clone();
                            set_submitting.set(true);
                            spawn_local(async move {
                                match actions.edit_remix_review(id, draft.get_untracked()).await {
                                    Ok(()) => {
                                        set_submitting.set(false);
                                        navigate(
                                            &format!("/remixes/{remix_id}"),
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
                        <ReviewFormFields draft=draft />
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
fn ReviewFormFields(draft: RwSignal<ReviewFormData>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="review-title">"Title"</label>
            <input
                id="review-title"
                type="text"
                class="input"
                required
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for="review-content">"Review"</label>
            <textarea
                id="review-content"
                class="input"
                required
                prop:value=move || draft.with(|d| d.content.clone())
                on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
            ></textarea>
        </div>
    }
}
