use leptos::prelude::*;

use crate::components::recipe_list::RecipeList;
use crate::components::remix_list::RemixList;
use crate::components::review_card::ReviewCard;
use crate::session::CurrentUserContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<CurrentUserContext>();

    view! {
        <div class="page home-page">
            <Show
                when=move || session.is_logged_in()
                fallback=|| view! {
                    <section class="welcome">
                        <h2>"Welcome to Remix"</h2>
                        <p>
                            "Share your recipes, discover what other cooks are making, "
                            "and remix their recipes into your own."
                        </p>
                        <div class="welcome-actions">
                            <a href="/login" class="btn btn-primary">"Log In"</a>
                            <a href="/signup" class="btn btn-secondary">"Sign Up"</a>
                        </div>
                    </section>
                }
            >
                <UserDashboard />
            </Show>
        </div>
    }
}

/// The logged-in home: the profile snapshot's 3 newest recipes and remixes
/// and the user's latest review of each kind, with links out to the full
/// lists.
#[component]
fn UserDashboard() -> impl IntoView {
    let session = expect_context::<CurrentUserContext>();

    let username = move || {
        session
            .current_user
            .with(|user| user.as_ref().map(|u| u.username.clone()).unwrap_or_default())
    };
    let recipes = Signal::derive(move || {
        session
            .current_user
            .with(|user| user.as_ref().map(|u| u.recipes.clone()).unwrap_or_default())
    });
    let remixes = Signal::derive(move || {
        session
            .current_user
            .with(|user| user.as_ref().map(|u| u.remixes.clone()).unwrap_or_default())
    });

    view! {
        <h2>{move || format!("Welcome back, {}!", username())}</h2>

        <section class="dashboard-section">
            <div class="section-header">
                <h3>"Your Newest Recipes"</h3>
                <a href=move || format!("/users/{}/recipes", username())>"See all"</a>
            </div>
            <RecipeList recipes=recipes />
        </section>

        <section class="dashboard-section">
            <div class="section-header">
                <h3>"Your Newest Remixes"</h3>
                <a href=move || format!("/users/{}/remixes", username())>"See all"</a>
            </div>
            <RemixList remixes=remixes />
        </section>

        <section class="dashboard-section">
            <div class="section-header">
                <h3>"Your Latest Recipe Review"</h3>
                <a href=move || format!("/users/{}/reviews/recipes", username())>"See all"</a>
            </div>
            {move || {
                session.current_user.with(|user| {
                    user.as_ref().and_then(|u| u.recipe_review.clone()).map(|review| {
                        view! {
                            <ReviewCard
                                subject=format!("Review of {}", review.recipe_name)
                                title=review.title
                                content=review.content
                                edit_href=Some(format!("/reviews/recipes/{}/edit", review.id))
                            />
                        }
                    })
                })
            }}
        </section>

        <section class="dashboard-section">
            <div class="section-header">
                <h3>"Your Latest Remix Review"</h3>
                <a href=move || format!("/users/{}/reviews/remixes", username())>"See all"</a>
            </div>
            {move || {
                session.current_user.with(|user| {
                    user.as_ref().and_then(|u| u.remix_review.clone()).map(|review| {
                        view! {
                            <ReviewCard
                                subject=format!("Review of {}", review.remix_name)
                                title=review.title
                                content=review.content
                                edit_href=Some(format!("/reviews/remixes/{}/edit", review.id))
                            />
                        }
                    })
                })
            }}
        </section>
    }
}
