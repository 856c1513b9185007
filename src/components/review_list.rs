use leptos::prelude::*;

use crate::components::review_card::ReviewCard;
use crate::models::ReviewDetails;

#[component]
pub fn ReviewList(#[prop(into)] reviews: Signal<Vec<ReviewDetails>>) -> impl IntoView {
    view! {
        <Show
            when=move || !reviews.with(|r| r.is_empty())
            fallback=|| view! { <p class="empty-list">"No reviews yet."</p> }
        >
            <div class="review-stack">
                <For
                    each=move || reviews.get()
                    key=|review| review.id
                    children=|review| view! {
                        <ReviewCard
                            title=review.title
                            content=review.content
                            author=review.review_author
                        />
                    }
                />
            </div>
        </Show>
    }
}
