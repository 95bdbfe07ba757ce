use contracts::domain::a008_team::aggregate::TeamMemberRow;
use contracts::domain::common::{ContentForm, DeleteContentRequest};
use contracts::shared::api::ListShape;
use contracts::shared::format::format_datetime;
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

const LIST: ListEndpoint = ListEndpoint::new("admin/get-team", ListShape::Flat);
const DELETE_PATH: &str = "admin/delete-team";

const KIND: ContentKind = ContentKind {
    entity: "Team Member",
    title_label: "Name",
    description_label: "Designation",
    add_path: "admin/add-team",
    edit_path: "admin/edit-team",
};

#[derive(Clone)]
enum TeamDialog {
    Edit(ContentForm),
    Delete(TeamMemberRow),
}

#[component]
pub fn TeamList() -> impl IntoView {
    let table: RemoteTable<TeamMemberRow> = use_remote_table(LIST);
    let dialog = RwSignal::new(None::<TeamDialog>);
    let busy = RwSignal::new(false);

    let close = Callback::new(move |_: ()| dialog.set(None));

    let remove = move |row: TeamMemberRow| {
        let token = table.session().token_untracked();
        let path = DeleteContentRequest::new(&row.id).append_to(DELETE_PATH);
        table.execute_row_action(
            busy,
            async move { delete(&path, token.as_deref()).await },
            |body| success_message(body, "Team member deleted successfully"),
            "Failed to delete team member",
            move |_| {
                let _ = dialog.try_set(None);
            },
        );
    };

    let export = move |_: ()| table.export("team", |n, row: &TeamMemberRow| row.export_record(n));

    view! {
        <PageFrame page_id="a008_team--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Team"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || table.total_rows().get().to_string()}
                    </UiBadge>
                </div>
            </div>

            <div class="page__content">
                <TableToolbar
                    table=table
                    search_placeholder="Name..."
                    on_export=Callback::new(export)
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog.set(Some(TeamDialog::Edit(ContentForm::default())))
                    >
                        {icon("plus")}
                        "Add Member"
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
                                <SortableHeaderCell label="Name" sort_key="title" sort=table.sort() on_sort=table.on_sort() min_width=150.0 />
                                <TableHeaderCell resizable=false min_width=160.0>"Designation"</TableHeaderCell>
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
                                            <TableCell><StatusBadgeView badge=status_badge /></TableCell>
                                            <TableCell>{format_datetime(&row.created_at)}</TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title="Edit"
                                                        on:click=move |_| dialog.set(Some(TeamDialog::Edit(form.clone())))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title="Delete"
                                                        on:click=move |_| dialog.set(Some(TeamDialog::Delete(for_delete.clone())))
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
                TeamDialog::Edit(form) => view! {
                    <ContentEditorDialog table=table kind=KIND form=form on_close=close />
                }
                .into_any(),
                TeamDialog::Delete(row) => {
                    let name = row.title.clone();
                    view! {
                        <ConfirmDialog
                            title="Delete Team Member"
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
