//! Реактивная обертка над [`RemoteTableController`]: выборка страниц,
//! действия над строками и выгрузка для всех списочных страниц.

mod pagination;
mod toolbar;

pub use toolbar::{CategoryFilter, TableToolbar};

use contracts::shared::api::ApiError;
use contracts::shared::remote_table::export::build_csv;
use contracts::shared::remote_table::{
    ActionVerb, ApplyOutcome, BulkActionRequest, ExportRecord, FetchTicket, PageCheckState,
    RemoteTableController, SortSpec, TableRow, NOTHING_TO_EXPORT,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

use crate::layout::notification_service::{use_notifications, NotificationService};
use crate::shared::config::config;
use crate::shared::export::{download_export, today};
use crate::shared::http::{fetch_list, ListEndpoint};
use crate::system::auth::context::{use_session, SessionStore};

const FETCH_ERROR: &str = "Failed to fetch data";
const EXPORT_ERROR: &str = "Failed to export data";

/// Ограничения на тип строки удаленной таблицы
pub trait RemoteRow: TableRow + DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> RemoteRow for T where T: TableRow + DeserializeOwned + Clone + Send + Sync + 'static {}

/// Строка текущей страницы для `<For>`. `key` включает номер загрузки,
/// поэтому после перезагрузки строки с тем же id перерисовываются.
#[derive(Clone)]
pub struct PageRow<R> {
    pub key: (u64, String),
    /// Номер для колонки "No"
    pub number: usize,
    pub row: R,
}

/// Таблица с серверной пагинацией, привязанная к одному списочному endpoint-у
pub struct RemoteTable<R: RemoteRow> {
    state: RwSignal<RemoteTableController<R>>,
    endpoint: ListEndpoint,
    /// Блок ответа с агрегатами (например, `totalAmount` у инвестиций)
    block: RwSignal<Value>,
    exporting: RwSignal<bool>,
    /// Счетчик примененных ответов
    generation: RwSignal<u64>,
    refresh: Trigger,
    session: SessionStore,
    notifications: NotificationService,
}

impl<R: RemoteRow> Clone for RemoteTable<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RemoteRow> Copy for RemoteTable<R> {}

/// Создает таблицу и запускает согласование запроса.
///
/// Эффект следит за кортежем запроса, наличием токена и принудительным
/// обновлением. Каждый проход либо сбрасывает страницу после смены фильтра,
/// либо выдает билет на запрос, либо ничего не делает.
pub fn use_remote_table<R: RemoteRow>(endpoint: ListEndpoint) -> RemoteTable<R> {
    let table = RemoteTable {
        state: RwSignal::new(RemoteTableController::new(config().table.default_page_size)),
        endpoint,
        block: RwSignal::new(Value::Null),
        exporting: RwSignal::new(false),
        generation: RwSignal::new(0),
        refresh: Trigger::new(),
        session: use_session(),
        notifications: use_notifications(),
    };

    let query = Memo::new(move |_| table.state.with(|c| c.query().clone()));

    Effect::new(move |_| {
        query.track();
        table.refresh.track();
        let has_token = table.session.has_token();

        // после сброса страницы Memo запроса изменится и эффект пройдет еще раз
        let ticket = table
            .state
            .try_update(|c| c.reconcile(has_token))
            .flatten();
        if let Some(ticket) = ticket {
            table.fetch(ticket);
        }
    });

    table
}

impl<R: RemoteRow> RemoteTable<R> {
    fn fetch(self, ticket: FetchTicket) {
        let FetchTicket { seq, query } = ticket;
        let endpoint = self.endpoint;
        let params = query.to_list_params(endpoint.category_param);
        let token = self.session.token_untracked();
        log::debug!("{} fetch #{} page {}", endpoint.path, seq, query.page_index + 1);

        spawn_local(async move {
            let (result, block) = match fetch_list::<R>(&endpoint, &params, token.as_deref()).await
            {
                Ok((page, block)) => (Ok(page), block),
                Err(err) => (Err(err), Value::Null),
            };

            match self.state.try_update(|c| c.apply(seq, result)) {
                Some(ApplyOutcome::Applied) => {
                    let _ = self.block.try_set(block);
                    let _ = self.generation.try_update(|g| *g += 1);
                }
                Some(ApplyOutcome::Stale) => {
                    log::debug!("{} response #{} is stale, dropped", endpoint.path, seq);
                }
                Some(ApplyOutcome::Failed(err)) => self.session.report(&err, FETCH_ERROR),
                // страница закрыта до прихода ответа
                None => {}
            }
        });
    }

    // ============================================================================
    // Чтение
    // ============================================================================

    pub fn with<T>(&self, f: impl FnOnce(&RemoteTableController<R>) -> T) -> T {
        self.state.with(f)
    }

    pub fn with_untracked<T>(&self, f: impl FnOnce(&RemoteTableController<R>) -> T) -> T {
        self.state.with_untracked(f)
    }

    pub fn page_rows(&self) -> Vec<PageRow<R>> {
        let generation = self.generation.get();
        self.state.with(|c| {
            c.rows()
                .iter()
                .enumerate()
                .map(|(i, row)| PageRow {
                    key: (generation, row.row_id()),
                    number: c.row_number(i),
                    row: row.clone(),
                })
                .collect()
        })
    }

    pub fn total_rows(&self) -> Signal<u64> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.total_rows()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.is_loading()))
    }

    pub fn is_exporting(&self) -> Signal<bool> {
        self.exporting.into()
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.error().map(str::to_string)))
    }

    pub fn sort(&self) -> Signal<Option<SortSpec>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.query().sort.clone()))
    }

    pub fn block(&self) -> Signal<Value> {
        self.block.into()
    }

    pub fn page_check_state(&self) -> Signal<PageCheckState> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.selection().page_state(c.rows())))
    }

    pub fn is_selected(&self, id: String) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.selection().contains(&id)))
    }

    pub fn selected_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.selection().len()))
    }

    pub fn bulk_busy(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.bulk_in_flight().is_some()))
    }

    // ============================================================================
    // Изменение запроса
    // ============================================================================

    pub fn update(&self, f: impl FnOnce(&mut RemoteTableController<R>)) {
        self.state.update(f);
    }

    pub fn on_sort(&self) -> Callback<&'static str> {
        let state = self.state;
        Callback::new(move |key: &'static str| state.update(|c| c.toggle_sort(key)))
    }

    pub fn on_toggle_page(&self) -> Callback<bool> {
        let state = self.state;
        Callback::new(move |checked: bool| state.update(|c| c.toggle_page(checked)))
    }

    pub fn on_toggle_row(&self, id: String) -> Callback<bool> {
        let state = self.state;
        Callback::new(move |checked: bool| state.update(|c| c.toggle_row(&id, checked)))
    }

    /// "Refresh": запрос по умолчанию и принудительная перезагрузка
    pub fn refresh(&self) {
        if self.state.try_update(|c| c.reset()).is_some() {
            let _ = self.block.try_set(Value::Null);
            self.refresh.notify();
        }
    }

    // ============================================================================
    // Действия
    // ============================================================================

    /// После действия над строкой. Успех сбрасывает запрос и перезагружает таблицу.
    pub fn finish_row_action(&self, success: bool) {
        if self.state.try_update(|c| c.finish_row_action(success)).is_some() && success {
            self.refresh.notify();
        }
    }

    /// Поднимает флаг массового действия. `None`, если выбор пуст или
    /// другое действие еще выполняется (причина показывается уведомлением).
    pub fn begin_bulk_action(&self, verb: ActionVerb) -> Option<BulkActionRequest> {
        match self.state.try_update(|c| c.begin_bulk_action(verb))? {
            Ok(request) => Some(request),
            Err(err) => {
                self.notifications.error(err.message);
                None
            }
        }
    }

    /// Снимает флаг, очищает выбор и перезагружает таблицу при любом исходе
    pub fn finish_bulk_action(&self, success: bool) {
        if self.state.try_update(|c| c.finish_bulk_action(success)).is_some() {
            self.refresh.notify();
        }
    }

    /// Одно изменяющее действие над строкой. Успех показывает `message(body)`
    /// и перезагружает таблицу, ошибка показывает сообщение backend-а.
    /// Повторов и отката нет. `done` закрывает диалог.
    pub fn execute_row_action<Fut, M>(
        &self,
        busy: RwSignal<bool>,
        call: Fut,
        message: M,
        failure: &'static str,
        done: impl FnOnce(bool) + 'static,
    ) where
        Fut: Future<Output = Result<Value, ApiError>> + 'static,
        M: FnOnce(&Value) -> String + 'static,
    {
        let this = *self;
        busy.set(true);
        spawn_local(async move {
            let success = match call.await {
                Ok(body) => {
                    this.notifications.success(message(&body));
                    true
                }
                Err(err) => {
                    this.session.report(&err, failure);
                    false
                }
            };
            let _ = busy.try_set(false);
            done(success);
            this.finish_row_action(success);
        });
    }

    /// Массовое действие, начатое через [`Self::begin_bulk_action`].
    /// По завершении выбор очищается и таблица перезагружается.
    pub fn execute_bulk_action<Fut, M>(
        &self,
        call: Fut,
        message: M,
        failure: &'static str,
        done: impl FnOnce(bool) + 'static,
    ) where
        Fut: Future<Output = Result<Value, ApiError>> + 'static,
        M: FnOnce(&Value) -> String + 'static,
    {
        let this = *self;
        spawn_local(async move {
            let success = match call.await {
                Ok(body) => {
                    this.notifications.success(message(&body));
                    true
                }
                Err(err) => {
                    this.session.report(&err, failure);
                    false
                }
            };
            done(success);
            this.finish_bulk_action(success);
        });
    }

    /// Общая обработка ошибки действия
    pub fn report(&self, err: &ApiError, default: &str) {
        self.session.report(err, default);
    }

    pub fn notifications(&self) -> NotificationService {
        self.notifications
    }

    pub fn session(&self) -> SessionStore {
        self.session
    }

    // ============================================================================
    // Выгрузка
    // ============================================================================

    /// Запрашивает все строки текущего фильтра одним запросом (page=1,
    /// limit=total) и скачивает CSV. `record` получает номер строки с 1.
    pub fn export<F>(&self, stem: &'static str, record: F)
    where
        F: Fn(usize, &R) -> ExportRecord + 'static,
    {
        if self.exporting.get_untracked() {
            return;
        }
        let endpoint = self.endpoint;
        let params = self
            .state
            .with_untracked(|c| c.export_params(endpoint.category_param));
        let token = self.session.token_untracked();
        let this = *self;
        this.exporting.set(true);

        spawn_local(async move {
            let outcome = fetch_list::<R>(&endpoint, &params, token.as_deref()).await;
            let _ = this.exporting.try_set(false);

            let rows = match outcome {
                Ok((page, _)) => page.rows,
                Err(err) => {
                    this.session.report(&err, EXPORT_ERROR);
                    return;
                }
            };
            let records: Vec<ExportRecord> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| record(i + 1, row))
                .collect();

            match build_csv(&records, stem, today()) {
                Ok(None) => this.notifications.info(NOTHING_TO_EXPORT),
                Ok(Some(file)) => match download_export(&file) {
                    Ok(()) => {
                        log::info!("exported {} rows to {}", file.rows, file.filename);
                        this.notifications
                            .success(format!("Exported {} rows", file.rows));
                    }
                    Err(e) => {
                        log::error!("export download failed: {}", e);
                        this.notifications.error(EXPORT_ERROR);
                    }
                },
                Err(e) => {
                    log::error!("export failed: {}", e);
                    this.notifications.error(EXPORT_ERROR);
                }
            }
        });
    }
}
