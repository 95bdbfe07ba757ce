use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Пока `true`, Escape, клик по фону и кнопка закрытия игнорируются
    /// (запрос диалога еще выполняется)
    #[prop(optional, into)]
    locked: Signal<bool>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let close = move || {
        if !locked.get_untracked() {
            on_close.run(());
        }
    };

    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        <button
                            class="button button--icon modal__close"
                            disabled=move || locked.get()
                            on:click=move |_| close()
                        >
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Диалог подтверждения действия: "Cancel" и кнопка действия.
/// Пока `busy`, обе кнопки заблокированы и диалог не закрывается.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
    /// Дополнительная блокировка (например, пустой комментарий при отклонении)
    #[prop(optional, into)]
    confirm_disabled: Signal<bool>,
    #[prop(optional)] danger: bool,
    children: Children,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label);
    let appearance = if danger {
        ButtonAppearance::Primary
    } else {
        ButtonAppearance::Secondary
    };

    view! {
        <Modal title=title on_close=on_cancel locked=busy>
            {children()}
            <div class="modal-footer">
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_cancel.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=appearance
                        on_click=move |_| on_confirm.run(())
                        disabled=Signal::derive(move || busy.get() || confirm_disabled.get())
                    >
                        {move || {
                            if busy.get() {
                                "Please wait...".to_string()
                            } else {
                                confirm_label.get_value()
                            }
                        }}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
