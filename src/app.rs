use std::collections::HashSet;

use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::api::{api_base_url, RemixApi};
use crate::components::navbar::RemixNavbar;
use crate::components::protected_route::ProtectedRoute;
use crate::models::CurrentUserInfo;
use crate::pages::full_lists::{RecipeRemixListPage, RecipeReviewListPage, RemixReviewListPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::recipe_detail::RecipeDetailPage;
use crate::pages::recipe_form::{EditRecipePage, NewRecipePage};
use crate::pages::recipe_search::RecipeSearchPage;
use crate::pages::remix_detail::RemixDetailPage;
use crate::pages::remix_form::{EditRemixPage, NewRemixPage};
use crate::pages::review_form::{
    EditRecipeReviewPage, EditRemixReviewPage, NewRecipeReviewPage, NewRemixReviewPage,
};
use crate::pages::signup::SignUpPage;
use crate::pages::user_lists::{
    UserRecipeReviewsPage, UserRecipesPage, UserRemixReviewsPage, UserRemixesPage,
};
use crate::session::{CurrentUserContext, SessionActions};
use crate::storage::use_local_storage;
use crate::token::decode_username;

const TOKEN_STORAGE_ID: &str = "remix-token";

#[component]
pub fn App() -> impl IntoView {
    let (user_token, set_user_token) = use_local_storage(TOKEN_STORAGE_ID);
    let (current_user, set_current_user) = signal(None::<CurrentUserInfo>);
    let (favorite_recipe_ids, set_favorite_recipe_ids) = signal(HashSet::<i64>::new());
    let (favorite_remix_ids, set_favorite_remix_ids) = signal(HashSet::<i64>::new());
    // Gates the page tree until the session question is settled, so protected
    // routes never redirect a user who is merely still loading.
    let (user_info_loaded, set_user_info_loaded) = signal(false);

    let api = StoredValue::new(RemixApi::new(api_base_url()));
    // Bumped on every token change; a profile fetch that comes back under an
    // older generation is stale (the user logged out or switched accounts
    // mid-flight) and must be discarded.
    let fetch_generation = StoredValue::new(0u64);

    let session = CurrentUserContext {
        current_user,
        set_current_user,
        user_token,
        set_user_token,
        favorite_recipe_ids,
        set_favorite_recipe_ids,
        favorite_remix_ids,
        set_favorite_remix_ids,
    };
    provide_context(session);
    provide_context(SessionActions { api, session });

    // Session lifecycle: runs on mount and again whenever the token changes
    // (login, logout, profile update reissuing the token).
    Effect::new(move |_| {
        let token = user_token.get();
        set_user_info_loaded.set(false);
        let generation = fetch_generation.with_value(|g| g + 1);
        fetch_generation.set_value(generation);
        api.update_value(|api| api.set_token(token.clone()));

        let Some(token) = token else {
            set_current_user.set(None);
            set_favorite_recipe_ids.set(HashSet::new());
            set_favorite_remix_ids.set(HashSet::new());
            set_user_info_loaded.set(true);
            return;
        };

        spawn_local(async move {
            let fetched = match decode_username(&token) {
                Ok(username) => api
                    .get_value()
                    .get_current_logged_in_user(&username)
                    .await
                    .map_err(|err| err.to_string()),
                Err(err) => Err(err.to_string()),
            };
            if fetch_generation.get_value() != generation {
                return;
            }
            match fetched {
                Ok(user) => {
                    set_favorite_recipe_ids.set(user.favorite_recipe_ids.iter().copied().collect());
                    set_favorite_remix_ids.set(user.favorite_remix_ids.iter().copied().collect());
                    set_current_user.set(Some(user));
                    set_user_info_loaded.set(true);
                }
                Err(err) => {
                    // A token the server no longer honors is useless; drop it
                    // and let the effect re-run as logged out.
                    error!("could not restore session: {err}");
                    set_current_user.set(None);
                    set_user_token.set(None);
                }
            }
        });
    });

    view! {
        <Router>
            <RemixNavbar />
            <main class="content">
                <Show
                    when=move || user_info_loaded.get()
                    fallback=|| view! { <p class="loading">"Loading..."</p> }
                >
                    <Routes fallback=|| view! { <Redirect path="/" /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/signup") view=SignUpPage />
                        <Route
                            path=path!("/profile")
                            view=|| view! { <ProtectedRoute><ProfilePage /></ProtectedRoute> }
                        />
                        <Route path=path!("/recipes") view=RecipeSearchPage />
                        <Route
                            path=path!("/recipes/new")
                            view=|| view! { <ProtectedRoute><NewRecipePage /></ProtectedRoute> }
                        />
                        <Route path=path!("/recipes/:recipeId") view=RecipeDetailPage />
                        <Route
                            path=path!("/recipes/:recipeId/edit")
                            view=|| view! { <ProtectedRoute><EditRecipePage /></ProtectedRoute> }
                        />
                        <Route path=path!("/recipes/:recipeId/remixes") view=RecipeRemixListPage />
                        <Route
                            path=path!("/recipes/:recipeId/remixes/new")
                            view=|| view! { <ProtectedRoute><NewRemixPage /></ProtectedRoute> }
                        />
                        <Route path=path!("/recipes/:recipeId/reviews") view=RecipeReviewListPage />
                        <Route
                            path=path!("/recipes/:recipeId/reviews/new")
                            view=|| view! { <ProtectedRoute><NewRecipeReviewPage /></ProtectedRoute> }
                        />
                        <Route path=path!("/remixes/:remixId") view=RemixDetailPage />
                        <Route
                            path=path!("/remixes/:remixId/edit")
                            view=|| view! { <ProtectedRoute><EditRemixPage /></ProtectedRoute> }
                        />
                        <Route path=path!("/remixes/:remixId/reviews") view=RemixReviewListPage />
                        <Route
                            path=path!("/remixes/:remixId/reviews/new")
                            view=|| view! { <ProtectedRoute><NewRemixReviewPage /></ProtectedRoute> }
                        />
                        <Route
                            path=path!("/reviews/recipes/:reviewId/edit")
                            view=|| view! { <ProtectedRoute><EditRecipeReviewPage /></ProtectedRoute> }
                        />
                        <Route
                            path=path!("/reviews/remixes/:reviewId/edit")
                            view=|| view! { <ProtectedRoute><EditRemixReviewPage /></ProtectedRoute> }
                        />
                        <Route path=path!("/users/:username/recipes") view=UserRecipesPage />
                        <Route path=path!("/users/:username/remixes") view=UserRemixesPage />
                        <Route
                            path=path!("/users/:username/reviews/recipes")
                            view=UserRecipeReviewsPage
                        />
                        <Route
                            path=path!("/users/:username/reviews/remixes")
                            view=UserRemixReviewsPage
                        />
                    </Routes>
                </Show>
            </main>
        </Router>
    }
}
