use leptos::prelude::*;

/// One review, wherever reviews appear. `subject` names what the review is
/// about ("Review of Chili"); the edit link is present only on the logged-in
/// user's own reviews.
#[component]
pub fn ReviewCard(
    #[prop(into, optional)] subject: String,
    #[prop(into)] title: String,
    #[prop(into)] content: String,
    #[prop(into, optional)] author: String,
    #[prop(optional_no_strip)] edit_href: Option<String>,
) -> impl IntoView {
    let subject_line = (!subject.is_empty()).then(|| {
        view! { <p class="review-subject">{subject}</p> }
    });
    let author_line = (!author.is_empty()).then(|| {
        view! { <p class="review-author">{format!("by {author}")}</p> }
    });
    let edit_link = edit_href.map(|href| {
        view! { <a href=href class="review-edit-link">"Edit"</a> }
    });

    view! {
        <div class="card review-card">
            {subject_line}
            <div class="review-header">
                <h4 class="review-title">{title}</h4>
                {edit_link}
            </div>
            {author_line}
            <p class="review-content">{content}</p>
        </div>
    }
}
