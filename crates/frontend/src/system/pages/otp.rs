use contracts::system::auth::otp::OtpCountdown;
use contracts::system::auth::OtpVerifyRequest;
use contracts::system::route_guard::LOGIN_ROUTE;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::layout::notification_service::use_notifications;
use crate::shared::config::config;
use crate::system::auth::{api, context::use_session};

/// Второй шаг входа: код из письма и повторная отправка по таймеру
#[component]
pub fn OtpPage() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();

    let (code, set_code) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (is_resending, set_is_resending) = signal(false);
    let countdown = RwSignal::new(OtpCountdown::new(config().auth.otp_resend_seconds));

    // Тикает, пока страница жива
    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            if countdown.try_update(|c| c.tick()).is_none() {
                break;
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = OtpVerifyRequest {
            email: session.pending_email().unwrap_or_default(),
            email_otp: code.get_untracked().trim().to_string(),
        };
        if let Err(e) = request.validate() {
            set_error_message.set(Some(e.message));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::verify_otp(&request).await {
                Ok(auth) => {
                    notifications.success("Signed in successfully");
                    // guard маршрутов сам переведет на dashboard
                    session.establish(&auth);
                }
                Err(e) => {
                    set_error_message.set(Some(e.user_message("OTP verification failed")));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let on_resend = move |_| {
        let Some(email) = session.pending_email() else {
            return;
        };
        if !countdown.get_untracked().can_resend() {
            return;
        }
        set_is_resending.set(true);
        spawn_local(async move {
            match api::resend_otp(&email).await {
                Ok(message) => {
                    notifications.success(message);
                    countdown.update(|c| c.restart());
                }
                Err(e) => notifications.error(e.user_message("Failed to resend OTP")),
            }
            set_is_resending.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"ATMC Admin"</h1>
                <h2>"Verify OTP"</h2>

                <Show
                    when=move || session.pending_email().is_some()
                    fallback=|| view! {
                        <div class="error-message">
                            "Login session not found. "
                            <A href=LOGIN_ROUTE>"Sign in again"</A>
                        </div>
                    }
                >
                    <p class="login-hint">
                        "We sent a one-time code to "
                        <strong>{move || session.pending_email().unwrap_or_default()}</strong>
                    </p>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="otp">"One-time code"</label>
                            <input
                                type="text"
                                id="otp"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                maxlength="6"
                                prop:value=move || code.get()
                                on:input=move |ev| set_code.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Verifying..." } else { "Verify" }}
                        </button>
                    </form>

                    <div class="login-info">
                        <button
                            class="btn-link"
                            on:click=on_resend
                            disabled=move || {
                                is_resending.get() || !countdown.get().can_resend()
                            }
                        >
                            {move || {
                                let c = countdown.get();
                                if c.can_resend() {
                                    "Resend OTP".to_string()
                                } else {
                                    format!("Resend OTP in {}", c.display())
                                }
                            }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
