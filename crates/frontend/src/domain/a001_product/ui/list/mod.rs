use super::super::api;
use super::attributes::ProductAttributesEditor;
use crate::shared::components::table::{format_number_int, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::components::{EmptyState, FilterPanel, FilterSelect, FilterTags, PaginationControls};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::list_view::ListView;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::active_store::{use_active_store, use_store_scoped};
use contracts::domain::a001_product::{Product, StockLevel, PRODUCT_FILTERS};
use contracts::enums::product_status::ProductStatus;
use contracts::shared::collection::{PriceBucket, SortSpec};
use leptos::prelude::*;
use thaw::*;

const FILTER_LABELS: &[(&str, &str)] = &[
    ("q", "Search"),
    ("status", "Status"),
    ("category", "Category"),
    ("stock", "Stock"),
    ("warehouse", "Warehouse"),
    ("price", "Price"),
];

fn status_variant(status: ProductStatus) -> BadgeVariant {
    match status {
        ProductStatus::Active => BadgeVariant::Success,
        ProductStatus::Draft => BadgeVariant::Primary,
        ProductStatus::Inactive => BadgeVariant::Neutral,
        ProductStatus::Discontinued => BadgeVariant::Error,
    }
}

fn stock_variant(level: StockLevel) -> BadgeVariant {
    match level {
        StockLevel::InStock => BadgeVariant::Success,
        StockLevel::LowStock => BadgeVariant::Warning,
        StockLevel::OutOfStock => BadgeVariant::Error,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let currency = use_active_store().currency();
    let store = use_store_scoped(api::fetch_products);
    let list = ListView::new(store, PRODUCT_FILTERS, config().default_page_size)
        .with_sort(SortSpec::asc("name"))
        .sync_with_url();

    let editing = RwSignal::new(None::<Product>);
    let search = list.search_text("q");
    let page_items = list.page_items();

    let status_options = Signal::derive(|| {
        ProductStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let stock_options = Signal::derive(|| {
        StockLevel::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let price_options = Signal::derive(|| {
        PriceBucket::all()
            .into_iter()
            .map(|b| (b.code().to_string(), b.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let as_options = |values: Signal<Vec<String>>| {
        Signal::derive(move || values.get().into_iter().map(|v| (v.clone(), v)).collect::<Vec<_>>())
    };
    let category_options = as_options(list.options("category"));
    let warehouse_options = as_options(list.options("warehouseId"));

    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| list.set_filter("q", text))
                        placeholder="Search by name or SKU"
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
                            label="Category"
                            value=list.filter_value("category")
                            options=category_options
                            on_change=Callback::new(move |v| list.set_filter("category", v))
                        />
                        <FilterSelect
                            label="Stock"
                            value=list.filter_value("stock")
                            options=stock_options
                            on_change=Callback::new(move |v| list.set_filter("stock", v))
                        />
                        <FilterSelect
                            label="Warehouse"
                            value=list.filter_value("warehouse")
                            options=warehouse_options
                            on_change=Callback::new(move |v| list.set_filter("warehouse", v))
                        />
                        <FilterSelect
                            label="Price"
                            value=list.filter_value("price")
                            options=price_options
                            on_change=Callback::new(move |v| list.set_filter("price", v))
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
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="name" sort=list.sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="SKU" sort_field="sku" sort=list.sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Category" sort_field="category" sort=list.sort on_sort=on_sort />
                                <SortableHeaderCell label="Status" sort_field="status" sort=list.sort on_sort=on_sort />
                                <SortableHeaderCell label="Price" sort_field="price" sort=list.sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Stock" sort_field="stock" sort=list.sort on_sort=on_sort align="right" />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                page_items.get().into_iter().map(|product| {
                                    let level = product.stock_level();
                                    let for_edit = product.clone();
                                    let name_view = highlight_matches(&product.name, &query);
                                    let sku_view = highlight_matches(&product.sku, &query);
                                    view! {
                                        <TableRow
                                            class="table__row--clickable"
                                            on:click=move |_| editing.set(Some(for_edit.clone()))
                                        >
                                            <TableCell>
                                                <TableCellLayout>{name_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{sku_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product.category.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status_variant(product.status) label=product.status.display_name() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=product.price currency=currency />
                                            <TableCell class="text-right">
                                                <TableCellLayout>
                                                    <span title=level.display_name()>
                                                        <Badge variant=stock_variant(level) label=format_number_int(f64::from(product.stock)) />
                                                    </span>
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
                    empty_text="No products in this store yet"
                    on_reset_filters=Callback::new(move |_| list.reset_filters())
                />

                {move || editing.get().map(|product| view! {
                    <ProductAttributesEditor
                        product=product
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            store.refetch();
                        })
                    />
                })}
            </div>
        </PageFrame>
    }
}
