use contracts::domain::a009_blog::aggregate::BlogRow;
use contracts::domain::common::{ContentForm, DeleteContentRequest};
use contracts::shared::api::ListShape;
use contracts::shared::format::{format_datetime, or_dash};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::{SortableHeaderCell, TableCellCopy};
use crate::shared::components::ui::badge::{Badge as UiBadge, StatusBadgeView};
use crate::shared::content_editor::{ContentEditorDialog, ContentKind};
use crate::shared::http::{delete, success_message, ListEndpoint};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_table::{use_remote_table, PageRow, RemoteTable, TableToolbar};

const LIST: ListEndpoint = ListEndpoint::new("admin/get-blogs", ListShape::Flat);
const DELETE_PATH: &str = "admin/delete-blog";

const KIND: ContentKind = ContentKind {
    entity: "Blog",
    title_label: "Title",
    description_label: "Short Description",
    add_path: "admin/add-blog",
    edit_path: "admin/edit-blog",
};

#[derive(Clone)]
enum BlogDialog {
    Edit(ContentForm),
    Delete(BlogRow),
}

#[component]
pub fn BlogList() -> impl IntoView {
    let table: RemoteTable<BlogRow> = use_remote_table(LIST);
    let dialog = RwSignal::new(None::<BlogDialog>);
    let busy = RwSignal::new(false);

    let close = Callback::new(move |_: ()| dialog.set(None));

    let remove = move |row: BlogRow| {
        let token = table.session().token_untracked();
        let path = DeleteContentRequest::new(&row.id).append_to(DELETE_PATH);
        table.execute_row_action(
            busy,
            async move { delete(&path, token.as_deref()).await },
            |body| success_message(body, "Blog deleted successfully"),
            "Failed to delete blog",
            move |_| {
                let _ = dialog.try_set(None);
            },
        );
    };

    let export = move |_: ()| table.export("blogs", |n, row: &BlogRow| row.export_record(n));

    view! {
        <PageFrame page_id="a009_blog--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Blogs"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || table.total_rows().get().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <TableToolbar
                    table=table
                    search_placeholder="Title..."
                    on_export=Callback::new(export)
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog.set(Some(BlogDialog::Edit(ContentForm::default())))
                    >
                        {icon("plus")}
                        "Add Blog"
                    </Button>
                </TableToolbar>

                {move || table.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=50.0>"No"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=70.0>"Image"</TableHeaderCell>
                                <SortableHeaderCell label="Title" sort_key="title" sort=table.sort() on_sort=table.on_sort() min_width=150.0 />
                                <TableHeaderCell resizable=false min_width=220.0>"Short Description"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Link"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Date & Time"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Action"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || table.page_rows()
                                key=|r| r.key.clone()
                                children=move |PageRow { number, row, .. }| {
                                    let form = row.edit_form();
                                    let for_delete = row.clone();
                                    let status_badge = row.status_badge();
                                    let thumbnail_alt = row.title.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{number}</TableCell>
                                            <TableCell>
                                                <img class="table__thumbnail" src=row.thumbnail.clone() alt=thumbnail_alt />
                                            </TableCell>
                                            <TableCellCopy value=row.title.clone() />
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.short_description.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <a href=row.redirection_link.clone() target="_blank" rel="noopener noreferrer">
                                                    {or_dash(&row.redirection_link)}
                                                </a>
                                            </TableCell>
                                            <TableCell><StatusBadgeView badge=status_badge /></TableCell>
                                            <TableCell>{format_datetime(&row.created_at)}</TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title="Edit"
                                                        on:click=move |_| dialog.set(Some(BlogDialog::Edit(form.clone())))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title="Delete"
                                                        on:click=move |_| dialog.set(Some(BlogDialog::Delete(for_delete.clone())))
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || dialog.get().map(|current| match current {
                BlogDialog::Edit(form) => view! {
                    <ContentEditorDialog table=table kind=KIND form=form on_close=close />
                }
                .into_any(),
                BlogDialog::Delete(row) => {
                    let name = row.title.clone();
                    view! {
                        <ConfirmDialog
                            title="Delete Blog"
                            confirm_label="Delete"
                            on_confirm=Callback::new(move |_| remove(row.clone()))
                            on_cancel=close
                            busy=busy
                            danger=true
                        >
                            <p>{format!("Are you sure you want to delete {}?", name)}</p>
                        </ConfirmDialog>
                    }
                    .into_any()
                }
            })}
        </PageFrame>
    }
}
