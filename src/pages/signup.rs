use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::models::SignUpFormData;
use crate::session::SessionActions;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    view! {
        <div class="page auth-page">
            <h2>"Sign Up"</h2>
            <Alert texts=errors />
            <form
                class="auth-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let navigate = navigate.clone();
                    let form = SignUpFormData {
                        username: username.get_untracked(),
                        email: email.get_untracked(),
                        password: password.get_untracked(),
                    };
                    set_submitting.set(true);
                    spawn_local(async move {
                        match actions.sign_up(form).await {
                            // Registration does not log the user in; they
                            // confirm their new credentials at the login page.
                            Ok(_message) => {
                                set_submitting.set(false);
                                navigate("/login", NavigateOptions::default());
                            }
                            Err(messages) => {
                                set_errors.set(messages);
                                set_submitting.set(false);
                            }
                        }
                    });
                }
            >
                <div class="form-group">
                    <label for="signup-username">"Username"</label>
                    <input
                        id="signup-username"
                        type="text"
                        class="input"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="signup-email">"Email"</label>
                    <input
                        id="signup-email"
                        type="email"
                        class="input"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="signup-password">"Password"</label>
                    <input
                        id="signup-password"
                        type="password"
                        class="input"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "<a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
