use super::super::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::components::{EmptyState, FilterPanel, FilterSelect, FilterTags, PaginationControls};
use crate::shared::config::config;
use crate::shared::entity_store::Mutation;
use crate::shared::icons::icon;
use crate::shared::list_utils::{format_datetime, highlight_matches, SearchInput};
use crate::shared::list_view::ListView;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::active_store::use_store_scoped;
use contracts::domain::a003_notification::{MarkReadRequest, NOTIFICATION_FILTERS};
use contracts::enums::notification_kind::NotificationKind;
use contracts::shared::collection::SortSpec;
use leptos::prelude::*;
use thaw::*;

const FILTER_LABELS: &[(&str, &str)] = &[("q", "Search"), ("kind", "Type"), ("read", "State")];

fn kind_variant(kind: NotificationKind) -> BadgeVariant {
    match kind {
        NotificationKind::LowStock => BadgeVariant::Warning,
        NotificationKind::Order => BadgeVariant::Primary,
        NotificationKind::Transfer => BadgeVariant::Success,
        NotificationKind::Billing => BadgeVariant::Error,
        NotificationKind::System => BadgeVariant::Neutral,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NotificationList() -> impl IntoView {
    let store = use_store_scoped(api::fetch_notifications);
    let list = ListView::new(store, NOTIFICATION_FILTERS, config().default_page_size)
        .with_sort(SortSpec::desc("createdAt"))
        .sync_with_url();

    let search = list.search_text("q");
    let page_items = list.page_items();
    let mark_read = Mutation::new(api::mark_read);

    // Сервер только подтверждает отметку, список правим локально
    let mark = move |ids: Vec<String>| {
        if ids.is_empty() {
            return;
        }
        let marked = ids.clone();
        mark_read.mutate_with(MarkReadRequest { ids }, move |result| {
            if result.is_ok() {
                store.update_local(|items| {
                    items
                        .iter_mut()
                        .filter(|n| marked.contains(&n.id))
                        .for_each(|n| n.is_read = true);
                });
            }
        });
    };

    let visible = list.items();
    let unread_visible = Signal::derive(move || {
        visible
            .get()
            .iter()
            .filter(|n| !n.is_read)
            .map(|n| n.id.clone())
            .collect::<Vec<_>>()
    });

    let kind_options = Signal::derive(|| {
        NotificationKind::all()
            .into_iter()
            .map(|k| (k.code().to_string(), k.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let read_options = Signal::derive(|| {
        vec![
            ("unread".to_string(), "Unread".to_string()),
            ("read".to_string(), "Read".to_string()),
        ]
    });

    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a003_notification--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Notifications"</h1>
                    {move || view! {
                        <Badge variant=BadgeVariant::Primary label=format!("{} unread", unread_visible.get().len()) />
                    }}
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| list.set_filter("q", text))
                        placeholder="Search notifications"
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| mark(unread_visible.get_untracked())
                        disabled=Signal::derive(move || mark_read.is_pending().get() || unread_visible.get().is_empty())
                    >
                        {icon("check")}
                        " Mark all read"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| store.refetch()
                        disabled=store.is_loading()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=list.filters_expanded
                    active_filters_count=list.active_filters_count()
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=list.current_page()
                            total_pages=list.total_pages()
                            total_count=list.total_items()
                            page_size=list.page_size
                            on_page_change=Callback::new(move |page| list.page.set(page))
                            on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                        />
                    }
                    filter_tags=move || view! {
                        <FilterTags
                            filters=list.filters
                            labels=FILTER_LABELS
                            on_remove=Callback::new(move |key: String| list.clear_filter(&key))
                        />
                    }
                >
                    <div class="filter-panel__fields">
                        <FilterSelect
                            label="Type"
                            value=list.filter_value("kind")
                            options=kind_options
                            on_change=Callback::new(move |v| list.set_filter("kind", v))
                        />
                        <FilterSelect
                            label="State"
                            value=list.filter_value("read")
                            options=read_options
                            on_change=Callback::new(move |v| list.set_filter("read", v))
                        />
                    </div>
                </FilterPanel>

                {move || store.error().get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                {move || list.filter_error().get().map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Type" sort_field="kind" sort=list.sort on_sort=on_sort />
                                <SortableHeaderCell label="Title" sort_field="title" sort=list.sort on_sort=on_sort min_width=260.0 />
                                <SortableHeaderCell label="Received" sort_field="createdAt" sort=list.sort on_sort=on_sort min_width=150.0 />
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                page_items.get().into_iter().map(|notification| {
                                    let id = notification.id.clone();
                                    let is_read = notification.is_read;
                                    let title_view = highlight_matches(&notification.title, &query);
                                    let message_view = highlight_matches(&notification.message, &query);
                                    view! {
                                        <TableRow class=if is_read { "notification--read" } else { "notification--unread" }>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=kind_variant(notification.kind) label=notification.kind.display_name() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="notification__title">{title_view}</div>
                                                    <div class="notification__message">{message_view}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_datetime(&notification.created_at)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {(!is_read).then(|| view! {
                                                        <button
                                                            class="row-actions__btn"
                                                            title="Mark as read"
                                                            disabled=move || mark_read.is_pending().get()
                                                            on:click=move |_| mark(vec![id.clone()])
                                                        >
                                                            {icon("check")}
                                                        </button>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <EmptyState
                    status=list.status()
                    is_loading=store.is_loading()
                    empty_text="You have no notifications"
                    on_reset_filters=Callback::new(move |_| list.reset_filters())
                />
            </div>
        </PageFrame>
    }
}
