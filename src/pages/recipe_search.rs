use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::components::recipe_list::RecipeList;
use crate::components::search_bar::SearchBar;
use crate::models::RecipeSummary;
use crate::session::SessionActions;

#[component]
pub fn RecipeSearchPage() -> impl IntoView {
    let actions = expect_context::<SessionActions>();

    let (recipes, set_recipes) = signal(Vec::<RecipeSummary>::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);

    // An empty term means "show everything", both on mount and when the user
    // clears the search box and submits again.
    let run_search = move |term: String| {
        set_loading.set(true);
        spawn_local(async move {
            let api = actions.api.get_value();
            let result = if term.is_empty() {
                api.get_all_recipes().await
            } else {
                api.get_filtered_recipes_by_name(&term).await
            };
            match result {
                Ok(found) => {
                    set_errors.set(Vec::new());
                    set_recipes.set(found);
                }
                Err(err) => set_errors.set(err.into_messages()),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| run_search(String::new()));

    view! {
        <div class="page recipe-search-page">
            <h2>"Recipes"</h2>
            <SearchBar placeholder="Search recipes by name..." on_search=run_search />
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
