use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::models::UpdateProfileFormData;
use crate::session::{CurrentUserContext, SessionActions};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<CurrentUserContext>();
    let actions = expect_context::<SessionActions>();

    // Prefilled from the snapshot at mount; a successful save reissues the
    // token, the lifecycle refetches the profile, and this page re-renders
    // with the new values.
    let initial = session.current_user.with_untracked(|user| {
        user.as_ref()
            .map(|u| (u.username.clone(), u.email.clone()))
            .unwrap_or_default()
    });
    let (username, set_username) = signal(initial.0);
    let (email, set_email) = signal(initial.1);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (saved, set_saved) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    view! {
        <div class="page profile-page">
            <h2>"Edit Profile"</h2>
            <Alert texts=errors />
            <Alert texts=saved success=true />
            <form
                class="profile-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let form = UpdateProfileFormData {
                        username: username.get_untracked(),
                        email: email.get_untracked(),
                    };
                    set_saved.set(Vec::new());
                    set_submitting.set(true);
                    spawn_local(async move {
                        match actions.update_profile(form).await {
                            Ok(()) => {
                                set_errors.set(Vec::new());
                                set_saved.set(vec!["Profile updated.".to_string()]);
                            }
                            Err(messages) => set_errors.set(messages),
                        }
                        set_submitting.set(false);
                    });
                }
            >
                <div class="form-group">
                    <label for="profile-username">"Username"</label>
                    <input
                        id="profile-username"
                        type="text"
                        class="input"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="profile-email">"Email"</label>
                    <input
                        id="profile-email"
                        type="email"
                        class="input"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}
