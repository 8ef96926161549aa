use super::super::api;
use super::create::TransferCreate;
use crate::domain::a001_product::api::fetch_products;
use crate::domain::a005_warehouse::api::fetch_warehouses;
use crate::shared::components::table::{format_number_int, SortableHeaderCell};
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::components::{EmptyState, FilterPanel, FilterSelect, FilterTags, PaginationControls};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{format_datetime, highlight_matches, SearchInput};
use crate::shared::list_view::ListView;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;
use crate::system::active_store::use_store_scoped;
use contracts::domain::a006_transfer::{advance_local_status, TRANSFER_FILTERS};
use contracts::enums::transfer_status::TransferStatus;
use contracts::shared::collection::SortSpec;
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::*;

const FILTER_LABELS: &[(&str, &str)] = &[
    ("q", "Search"),
    ("status", "Status"),
    ("from", "From"),
    ("to", "To"),
];

fn status_variant(status: TransferStatus) -> BadgeVariant {
    match status {
        TransferStatus::Pending => BadgeVariant::Warning,
        TransferStatus::InTransit => BadgeVariant::Primary,
        TransferStatus::Completed => BadgeVariant::Success,
        TransferStatus::Cancelled => BadgeVariant::Neutral,
    }
}

/// Подпись кнопки, переводящей перемещение в следующий статус
fn action_label(status: TransferStatus) -> Option<&'static str> {
    match status.next()? {
        TransferStatus::InTransit => Some("Start"),
        TransferStatus::Completed => Some("Complete"),
        _ => None,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TransferList() -> impl IntoView {
    let store = use_store_scoped(api::fetch_transfers);
    let warehouses = use_store_scoped(fetch_warehouses);
    let products = use_store_scoped(fetch_products);
    let list = ListView::new(store, TRANSFER_FILTERS, config().default_page_size)
        .with_sort(SortSpec::desc("createdAt"))
        .sync_with_url();
    let toasts = use_toasts();

    let creating = RwSignal::new(false);
    let search = list.search_text("q");
    let page_items = list.page_items();

    let warehouse_data = warehouses.data();
    let warehouse_names = Memo::new(move |_| {
        warehouse_data.with(|items| {
            items
                .iter()
                .map(|w| (w.id.clone(), w.name.clone()))
                .collect::<HashMap<_, _>>()
        })
    });
    let warehouse_options = Signal::derive(move || {
        warehouse_data.with(|items| {
            items
                .iter()
                .filter(|w| w.is_active)
                .map(|w| (w.id.clone(), format!("{} ({})", w.name, w.code)))
                .collect::<Vec<_>>()
        })
    });
    let product_data = products.data();
    let product_options = Signal::derive(move || {
        product_data.with(|items| {
            items
                .iter()
                .map(|p| (p.id.clone(), format!("{} ({})", p.name, p.sku)))
                .collect::<Vec<_>>()
        })
    });

    let status_options = Signal::derive(|| {
        TransferStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let named_options = move |ids: Signal<Vec<String>>| {
        Signal::derive(move || {
            let names = warehouse_names.get();
            ids.get()
                .into_iter()
                .map(|id| {
                    let caption = names.get(&id).cloned().unwrap_or_else(|| id.clone());
                    (id, caption)
                })
                .collect::<Vec<_>>()
        })
    };
    let from_options = named_options(list.options("fromWarehouseId"));
    let to_options = named_options(list.options("toWarehouseId"));

    // Смена статуса видна только в этом списке до следующей загрузки
    let advance = move |id: String| {
        let mut next = None;
        store.update_local(|items| next = advance_local_status(items, &id));
        match (next, toasts) {
            (Some(status), Some(toasts)) => toasts.success(format!("Transfer is now {}", status.display_name())),
            (Some(_), None) => {}
            (None, _) => log::debug!("transfer {} has no next status", id),
        }
    };

    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a006_transfer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Transfers"</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| list.set_filter("q", text))
                        placeholder="Search by reference or note"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| creating.set(true)
                    >
                        {icon("plus")}
                        " New transfer"
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
                            label="Status"
                            value=list.filter_value("status")
                            options=status_options
                            on_change=Callback::new(move |v| list.set_filter("status", v))
                        />
                        <FilterSelect
                            label="From"
                            value=list.filter_value("from")
                            options=from_options
                            on_change=Callback::new(move |v| list.set_filter("from", v))
                        />
                        <FilterSelect
                            label="To"
                            value=list.filter_value("to")
                            options=to_options
                            on_change=Callback::new(move |v| list.set_filter("to", v))
                        />
                    </div>
                </FilterPanel>

                {move || store.error().get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                {move || creating.get().then(|| view! {
                    <TransferCreate
                        warehouse_options=warehouse_options
                        product_options=product_options
                        on_close=Callback::new(move |_| creating.set(false))
                        on_created=Callback::new(move |_| {
                            creating.set(false);
                            store.refetch();
                        })
                    />
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Reference" sort_field="reference" sort=list.sort on_sort=on_sort min_width=140.0 />
                                <TableHeaderCell min_width=240.0>"Route"</TableHeaderCell>
                                <SortableHeaderCell label="Status" sort_field="status" sort=list.sort on_sort=on_sort />
                                <SortableHeaderCell label="Quantity" sort_field="quantity" sort=list.sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Created" sort_field="createdAt" sort=list.sort on_sort=on_sort min_width=150.0 />
                                <TableHeaderCell min_width=110.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                let names = warehouse_names.get();
                                let name_of = |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());
                                page_items.get().into_iter().map(|transfer| {
                                    let route = format!("{} → {}", name_of(&transfer.from_warehouse_id), name_of(&transfer.to_warehouse_id));
                                    let id = transfer.id.clone();
                                    let note = transfer.note.clone().unwrap_or_default();
                                    let reference_view = highlight_matches(&transfer.reference, &query);
                                    let note_view = highlight_matches(&note, &query);
                                    let quantity_text = format_number_int(f64::from(transfer.total_quantity()));
                                    let created_text = format_datetime(&transfer.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div>{reference_view}</div>
                                                    <div class="table__secondary">{note_view}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{route}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status_variant(transfer.status) label=transfer.status.display_name() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <TableCellLayout>{quantity_text}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created_text}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {action_label(transfer.status).map(|label| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Secondary
                                                            size=ButtonSize::Small
                                                            on_click=move |_| advance(id.clone())
                                                        >
                                                            {label}
                                                        </Button>
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
                    empty_text="No transfers yet"
                    on_reset_filters=Callback::new(move |_| list.reset_filters())
                />
            </div>
        </PageFrame>
    }
}
