use contracts::system::auth::LoginRequest;
use contracts::system::route_guard::OTP_ROUTE;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::layout::notification_service::use_notifications;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let (email, set_email) = signal(session.pending_email().unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(e) = request.validate() {
            set_error_message.set(Some(e.message));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(message) => {
                    session.begin_login(&request.email);
                    notifications.success(message);
                    set_is_loading.set(false);
                    navigate(OTP_ROUTE, Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e.user_message("Login failed")));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ATMC Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
