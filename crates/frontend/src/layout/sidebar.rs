//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{page_for_key, PageEntry};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<&'static PageEntry>,
}

fn group(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    keys: &[&'static str],
) -> MenuGroup {
    MenuGroup {
        id,
        label,
        icon,
        items: keys.iter().filter_map(|key| page_for_key(key)).collect(),
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        group("overview", "Overview", "dashboard", &["d400_overview"]),
        group("members", "Members", "users", &["a001_user", "a002_pool_user"]),
        group(
            "finance",
            "Finance",
            "transactions",
            &["a003_transaction", "a004_withdrawal", "a005_investment", "a007_burning"],
        ),
        group("rewards", "Rewards", "airdrop", &["a006_airdrop"]),
        group("content", "Content", "blog", &["a008_team", "a009_blog"]),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id.to_string()).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let gid_show = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.with(|g| g.contains(&group_id_for_exp))
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Children
                        <Show when=move || expanded_groups.with(|g| g.contains(&gid_show))>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|page| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(page.key))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(page.key, page.title)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(page.icon)}
                                                <span>{page.title}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
