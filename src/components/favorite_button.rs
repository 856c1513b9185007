use leptos::prelude::*;

#[component]
pub fn FavoriteButton(
    #[prop(into)] is_favorite: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="btn favorite-btn"
            class:favorited=move || is_favorite.get()
            on:click=move |_| on_toggle.run(())
        >
            {move || if is_favorite.get() { "Favorited" } else { "Add to Favorites" }}
        </button>
    }
}
