use super::super::api;
use crate::domain::a004_location::api::fetch_locations;
use crate::shared::components::table::{format_number_int, format_percent, SortableHeaderCell};
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::components::{EmptyState, FilterPanel, FilterSelect, FilterTags, PaginationControls};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::list_view::ListView;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::active_store::use_store_scoped;
use contracts::domain::a005_warehouse::WAREHOUSE_FILTERS;
use contracts::shared::collection::SortSpec;
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::*;

const FILTER_LABELS: &[(&str, &str)] = &[("q", "Search"), ("status", "Status"), ("location", "Location")];

/// Класс полосы заполненности: предупреждение от 80%, критично от 95%
fn utilization_class(percent: f64) -> &'static str {
    if percent >= 95.0 {
        "utilization__bar utilization__bar--critical"
    } else if percent >= 80.0 {
        "utilization__bar utilization__bar--warning"
    } else {
        "utilization__bar"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WarehouseList() -> impl IntoView {
    let store = use_store_scoped(api::fetch_warehouses);
    let locations = use_store_scoped(fetch_locations);
    let list = ListView::new(store, WAREHOUSE_FILTERS, config().default_page_size)
        .with_sort(SortSpec::asc("name"))
        .sync_with_url();

    let search = list.search_text("q");
    let page_items = list.page_items();

    let location_data = locations.data();
    let location_names = Memo::new(move |_| {
        location_data.with(|items| {
            items
                .iter()
                .map(|l| (l.id.clone(), l.name.clone()))
                .collect::<HashMap<_, _>>()
        })
    });

    let status_options = Signal::derive(|| {
        vec![
            ("active".to_string(), "Active".to_string()),
            ("inactive".to_string(), "Inactive".to_string()),
        ]
    });
    let location_ids = list.options("locationId");
    let location_options = Signal::derive(move || {
        let names = location_names.get();
        location_ids
            .get()
            .into_iter()
            .map(|id| {
                let caption = names.get(&id).cloned().unwrap_or_else(|| id.clone());
                (id, caption)
            })
            .collect::<Vec<_>>()
    });

    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a005_warehouse--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Warehouses"</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| list.set_filter("q", text))
                        placeholder="Search by name or code"
                    />
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
                            label="Location"
                            value=list.filter_value("location")
                            options=location_options
                            on_change=Callback::new(move |v| list.set_filter("location", v))
                        />
                    </div>
                </FilterPanel>

                {move || store.error().get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="name" sort=list.sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Code" sort_field="code" sort=list.sort on_sort=on_sort />
                                <TableHeaderCell min_width=160.0>"Location"</TableHeaderCell>
                                <SortableHeaderCell label="Status" sort_field="status" sort=list.sort on_sort=on_sort />
                                <SortableHeaderCell label="Capacity" sort_field="capacity" sort=list.sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Utilization" sort_field="utilization" sort=list.sort on_sort=on_sort min_width=180.0 />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                let names = location_names.get();
                                page_items.get().into_iter().map(|warehouse| {
                                    let percent = warehouse.utilization();
                                    let (status_variant, status_label) = if warehouse.is_active {
                                        (BadgeVariant::Success, "Active")
                                    } else {
                                        (BadgeVariant::Neutral, "Inactive")
                                    };
                                    let location = warehouse
                                        .location_id
                                        .as_ref()
                                        .map(|id| names.get(id).cloned().unwrap_or_else(|| id.clone()))
                                        .unwrap_or_else(|| "—".to_string());
                                    let name_view = highlight_matches(&warehouse.name, &query);
                                    let code_view = highlight_matches(&warehouse.code, &query);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{name_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{code_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{location}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status_variant label=status_label />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <TableCellLayout>
                                                    {format!("{} / {}", format_number_int(f64::from(warehouse.used)), format_number_int(f64::from(warehouse.capacity)))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="utilization">
                                                        <div class="utilization__track">
                                                            <div
                                                                class=utilization_class(percent)
                                                                style=format!("width: {:.0}%;", percent.min(100.0))
                                                            ></div>
                                                        </div>
                                                        <span class="utilization__label">{format_percent(percent)}</span>
                                                    </div>
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
                    empty_text="No warehouses configured"
                    on_reset_filters=Callback::new(move |_| list.reset_filters())
                />
            </div>
        </PageFrame>
    }
}
