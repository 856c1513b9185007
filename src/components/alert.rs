use leptos::prelude::*;

/// Message box shown above forms. Renders nothing while the list is empty;
/// the same component carries validation errors (red) and confirmations
/// (green, with `success=true`).
#[component]
pub fn Alert(
    #[prop(into)] texts: Signal<Vec<String>>,
    #[prop(default = false)] success: bool,
) -> impl IntoView {
    let class = if success {
        "alert alert-success"
    } else {
        "alert alert-danger"
    };

    view! {
        <Show when=move || !texts.with(|t| t.is_empty())>
            <div class=class role="alert">
                <For
                    each=move || texts.get()
                    key=|text| text.clone()
                    children=|text| view! { <p class="alert-text">{text}</p> }
                />
            </div>
        </Show>
    }
}
