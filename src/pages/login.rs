use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::components::alert::Alert;
use crate::models::LoginFormData;
use crate::session::SessionActions;

#[component]
pub fn LoginPage() -> impl IntoView {
    let actions = expect_context::<SessionActions>();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    view! {
        <div class="page auth-page">
            <h2>"Log In"</h2>
            <Alert texts=errors />
            <form
                class="auth-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let navigate = navigate.clone();
                    let form = LoginFormData {
                        username: username.get_untracked(),
                        password: password.get_untracked(),
                    };
                    set_submitting.set(true);
                    spawn_local(async move {
                        match actions.login(form).await {
                            Ok(()) => {
                                set_submitting.set(false);
                                navigate("/", NavigateOptions::default());
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
                    <label for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        type="text"
                        class="input"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        class="input"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                </button>
            </form>
            <p class="auth-switch">
                "Need an account? "<a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
