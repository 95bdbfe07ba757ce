use contracts::shared::api::ApiError;
use contracts::system::auth::AuthSession;
use leptos::prelude::*;

use super::storage;
use crate::layout::notification_service::NotificationService;

/// Единственный владелец токена сессии. sessionStorage служит источником истины,
/// сигналы только отражают его для реактивного UI.
#[derive(Clone, Copy)]
pub struct SessionStore {
    token: RwSignal<Option<String>>,
    pending_email: RwSignal<Option<String>>,
    notifications: NotificationService,
}

impl SessionStore {
    /// Восстанавливает сессию из sessionStorage
    pub fn restore(notifications: NotificationService) -> Self {
        let token = storage::get_token();
        if token.is_some() {
            log::info!("session restored from storage");
        }
        Self {
            token: RwSignal::new(token),
            pending_email: RwSignal::new(storage::get_pending_email()),
            notifications,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn has_token(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    pub fn pending_email(&self) -> Option<String> {
        self.pending_email.get()
    }

    /// Шаг 1 пройден: запоминаем email для шага OTP
    pub fn begin_login(&self, email: &str) {
        storage::save_pending_email(email);
        self.pending_email.set(Some(email.to_string()));
    }

    /// Шаг 2 пройден: сохраняем сессию
    pub fn establish(&self, session: &AuthSession) {
        storage::save_session(session);
        self.pending_email.set(Some(session.email.clone()));
        self.token.set(Some(session.token.clone()));
        log::info!("session established for {}", session.email);
    }

    fn clear(&self) {
        storage::clear_session();
        self.token.set(None);
        self.pending_email.set(None);
    }

    pub fn sign_out(&self) {
        self.clear();
        self.notifications.info("Signed out");
    }

    /// Токен протух: очищаем сессию, guard маршрутов уводит на `/login`
    pub fn invalidate(&self) {
        log::warn!("session invalidated");
        self.clear();
        self.notifications.error("Session expired");
    }

    /// Общая обработка ошибки API для уведомлений
    pub fn report(&self, err: &ApiError, default: &str) {
        match err {
            ApiError::SessionExpired => self.invalidate(),
            ApiError::NotAuthenticated => log::debug!("skipped call without session"),
            _ => self.notifications.error(err.user_message(default)),
        }
    }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore not provided in context")
}
