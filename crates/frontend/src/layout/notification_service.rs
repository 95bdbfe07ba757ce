use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::config::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Info => "notification notification--info",
            NotificationKind::Error => "notification notification--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

/// Сервис всплывающих уведомлений. Каждое уведомление само скрывается через
/// `notifications.dismiss_after_ms`.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let id = Uuid::new_v4();
        match kind {
            NotificationKind::Error => log::warn!("notification: {}", message),
            _ => log::debug!("notification: {}", message),
        }
        self.items.update(|items| items.push(Notification { id, kind, message }));

        let service = *self;
        let delay = config().notifications.dismiss_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            service.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        // сигнал мог быть уничтожен вместе с приложением
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Стек уведомлений в правом верхнем углу
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <span class="notification__message">{n.message.clone()}</span>
                            <button
                                class="notification__close"
                                title="Close"
                                on:click=move |_| service.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
