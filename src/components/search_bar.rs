use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    view! {
        <form
            class="search-bar"
            on:submit=move |ev| {
                ev.prevent_default();
                on_search.run(term.get_untracked().trim().to_string());
            }
        >
            <input
                type="text"
                class="search-input"
                placeholder=placeholder
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">"Search"</button>
        </form>
    }
}
