use super::super::api;
use super::details::BundleDetails;
use crate::domain::a001_product::api::fetch_products;
use crate::shared::components::table::{format_number_int, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::components::{EmptyState, FilterPanel, FilterSelect, FilterTags, PaginationControls};
use crate::shared::config::config;
use crate::shared::entity_store::Mutation;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::list_view::ListView;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::active_store::{use_active_store, use_store_scoped};
use contracts::domain::a002_bundle::{Bundle, BUNDLE_FILTERS};
use contracts::enums::product_status::ProductStatus;
use contracts::shared::collection::{PriceBucket, SortSpec};
use leptos::prelude::*;
use thaw::*;

const FILTER_LABELS: &[(&str, &str)] = &[("q", "Search"), ("status", "Status"), ("price", "Price")];

/// Что открыто в панели справа
#[derive(Clone)]
enum Editing {
    New,
    Existing(Bundle),
}

#[component]
#[allow(non_snake_case)]
pub fn BundleList() -> impl IntoView {
    let currency = use_active_store().currency();
    let store = use_store_scoped(api::fetch_bundles);
    let products = use_store_scoped(fetch_products);
    let list = ListView::new(store, BUNDLE_FILTERS, config().default_page_size)
        .with_sort(SortSpec::asc("name"))
        .sync_with_url();

    let editing = RwSignal::new(None::<Editing>);
    let search = list.search_text("q");
    let page_items = list.page_items();

    let delete_mutation = Mutation::new(api::delete_bundle).invalidates(store);

    let product_data = products.data();
    let product_names = Signal::derive(move || {
        product_data.with(|items| {
            items
                .iter()
                .map(|p| (p.id.clone(), format!("{} ({})", p.name, p.sku)))
                .collect::<Vec<_>>()
        })
    });
    let status_options = Signal::derive(|| {
        ProductStatus::all()
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

    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a002_bundle--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Bundles"</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| list.set_filter("q", text))
                        placeholder="Search by name or SKU"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(Editing::New))
                    >
                        {icon("plus")}
                        " New bundle"
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
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="name" sort=list.sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="SKU" sort_field="sku" sort=list.sort on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Status" sort_field="status" sort=list.sort on_sort=on_sort />
                                <SortableHeaderCell label="Items" sort_field="items" sort=list.sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Price" sort_field="price" sort=list.sort on_sort=on_sort align="right" />
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                page_items.get().into_iter().map(|bundle| {
                                    let for_edit = bundle.clone();
                                    let id = bundle.id.clone();
                                    let variant = match bundle.status {
                                        ProductStatus::Active => BadgeVariant::Success,
                                        ProductStatus::Discontinued => BadgeVariant::Error,
                                        _ => BadgeVariant::Neutral,
                                    };
                                    let name_view = highlight_matches(&bundle.name, &query);
                                    let sku_view = highlight_matches(&bundle.sku, &query);
                                    let units_text = format!("{} / {} units", bundle.items.len(), format_number_int(f64::from(bundle.total_units())));
                                    view! {
                                        <TableRow
                                            class="table__row--clickable"
                                            on:click=move |_| editing.set(Some(Editing::Existing(for_edit.clone())))
                                        >
                                            <TableCell>
                                                <TableCellLayout>{name_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{sku_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=variant label=bundle.status.display_name() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <TableCellLayout>
                                                    {units_text}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=bundle.price currency=currency />
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="row-actions__btn row-actions__btn--danger"
                                                        title="Delete bundle"
                                                        disabled=move || delete_mutation.is_pending().get()
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            delete_mutation.mutate(id.clone());
                                                        }
                                                    >
                                                        {icon("delete")}
                                                    </button>
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
                    empty_text="No bundles yet"
                    on_reset_filters=Callback::new(move |_| list.reset_filters())
                />

                {move || editing.get().map(|target| {
                    let bundle = match target {
                        Editing::New => None,
                        Editing::Existing(bundle) => Some(bundle),
                    };
                    view! {
                        <BundleDetails
                            bundle=bundle
                            product_options=product_names
                            on_close=Callback::new(move |_| editing.set(None))
                            on_saved=Callback::new(move |_| {
                                editing.set(None);
                                store.refetch();
                            })
                        />
                    }
                })}
            </div>
        </PageFrame>
    }
}
