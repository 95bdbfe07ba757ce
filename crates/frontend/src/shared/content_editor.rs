//! Диалог добавления/редактирования карточки (команда, блог)

use contracts::domain::common::{ContentForm, ContentStatus, ImageUpload, ACCEPTED_IMAGE_TYPES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::shared::http::{post_json, success_message};
use crate::shared::modal::Modal;
use crate::shared::remote_table::{RemoteRow, RemoteTable};

/// Подписи и endpoint-ы конкретного вида карточек
#[derive(Clone, Copy)]
pub struct ContentKind {
    /// "Team Member", "Blog"
    pub entity: &'static str,
    pub title_label: &'static str,
    pub description_label: &'static str,
    pub add_path: &'static str,
    pub edit_path: &'static str,
}

async fn read_image(file: web_sys::File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    ImageUpload::from_bytes(&file.type_(), &bytes).map_err(|e| e.message)
}

#[component]
pub fn ContentEditorDialog<R>(
    table: RemoteTable<R>,
    kind: ContentKind,
    form: ContentForm,
    on_close: Callback<()>,
) -> impl IntoView
where
    R: RemoteRow,
{
    let is_edit = form.is_edit();
    let form = RwSignal::new(form);
    let busy = RwSignal::new(false);
    let reading = RwSignal::new(false);

    let preview = move || {
        form.with(|f| {
            f.image
                .as_ref()
                .map(|img| img.data_url.clone())
                .or_else(|| f.existing_thumbnail.clone())
        })
    };

    let on_file = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        reading.set(true);
        spawn_local(async move {
            let result = read_image(file).await;
            let _ = reading.try_set(false);
            match result {
                Ok(image) => {
                    log::debug!("image attached: {} ({} bytes)", image.mime, image.size);
                    let _ = form.try_update(|f| f.image = Some(image));
                }
                Err(message) => table.notifications().error(message),
            }
        });
    };

    let submit = move |_| {
        let request = match form.with_untracked(ContentForm::validate) {
            Ok(request) => request,
            Err(err) => {
                table.notifications().error(err.message);
                return;
            }
        };
        let path = if is_edit { kind.edit_path } else { kind.add_path };
        let default = if is_edit {
            format!("{} updated successfully", kind.entity)
        } else {
            format!("{} added successfully", kind.entity)
        };
        let token = table.session().token_untracked();
        table.execute_row_action(
            busy,
            async move { post_json(path, token.as_deref(), &request).await },
            move |body| success_message(body, &default),
            if is_edit { "Failed to update" } else { "Failed to add" },
            move |success| {
                if success {
                    on_close.run(());
                }
            },
        );
    };

    let title = if is_edit {
        format!("Edit {}", kind.entity)
    } else {
        format!("Add {}", kind.entity)
    };

    view! {
        <Modal title=title on_close=on_close locked=busy>
            <div class="form">
                <div class="form-group">
                    <label for="content-title">{kind.title_label}</label>
                    <input
                        id="content-title"
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="content-description">{kind.description_label}</label>
                    <textarea
                        id="content-description"
                        rows="3"
                        prop:value=move || form.with(|f| f.short_description.clone())
                        on:input=move |ev| form.update(|f| f.short_description = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="content-link">"Redirection Link"</label>
                    <input
                        id="content-link"
                        type="text"
                        placeholder="#"
                        prop:value=move || form.with(|f| f.redirection_link.clone())
                        on:input=move |ev| form.update(|f| f.redirection_link = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="content-status">"Status"</label>
                    <select
                        id="content-status"
                        prop:value=move || form.with(|f| f.status.as_str())
                        on:change=move |ev| {
                            form.update(|f| f.status = ContentStatus::parse(&event_target_value(&ev)))
                        }
                    >
                        <option value=ContentStatus::Active.as_str()>"Active"</option>
                        <option value=ContentStatus::Block.as_str()>"Block"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="content-image">"Image"</label>
                    <input
                        id="content-image"
                        type="file"
                        accept=ACCEPTED_IMAGE_TYPES.join(",")
                        on:change=on_file
                    />
                    {move || preview().map(|src| view! {
                        <img class="form-image-preview" src=src alt="preview" />
                    })}
                </div>
            </div>

            <div class="modal-footer">
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || busy.get() || reading.get())
                    >
                        {move || if busy.get() { "Please wait..." } else if is_edit { "Save" } else { "Add" }}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
