use super::super::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::components::{EmptyState, FilterPanel, FilterSelect, FilterTags, PaginationControls};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::list_view::ListView;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::active_store::use_store_scoped;
use contracts::domain::a004_location::{Location, LOCATION_FILTERS};
use contracts::enums::location_type::LocationType;
use contracts::shared::collection::SortSpec;
use leptos::prelude::*;
use thaw::*;

const FILTER_LABELS: &[(&str, &str)] = &[("q", "Search"), ("type", "Type"), ("country", "Country")];

fn type_variant(location_type: LocationType) -> BadgeVariant {
    match location_type {
        LocationType::Store => BadgeVariant::Primary,
        LocationType::Warehouse => BadgeVariant::Success,
        LocationType::Office => BadgeVariant::Neutral,
        LocationType::Supplier => BadgeVariant::Warning,
    }
}

fn coordinates(location: &Location) -> String {
    match (location.latitude, location.longitude) {
        (Some(lat), Some(lon)) => format!("{:.4}, {:.4}", lat, lon),
        _ => "—".to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn LocationList() -> impl IntoView {
    let store = use_store_scoped(api::fetch_locations);
    let list = ListView::new(store, LOCATION_FILTERS, config().default_page_size)
        .with_sort(SortSpec::asc("name"))
        .sync_with_url();

    let search = list.search_text("q");
    let page_items = list.page_items();

    let type_options = Signal::derive(|| {
        LocationType::all()
            .into_iter()
            .map(|t| (t.code().to_string(), t.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let countries = list.options("country");
    let country_options =
        Signal::derive(move || countries.get().into_iter().map(|c| (c.clone(), c)).collect::<Vec<_>>());

    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a004_location--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Locations"</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| list.set_filter("q", text))
                        placeholder="Search by name, address or city"
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
                            label="Type"
                            value=list.filter_value("type")
                            options=type_options
                            on_change=Callback::new(move |v| list.set_filter("type", v))
                        />
                        <FilterSelect
                            label="Country"
                            value=list.filter_value("country")
                            options=country_options
                            on_change=Callback::new(move |v| list.set_filter("country", v))
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
                                <SortableHeaderCell label="Type" sort_field="type" sort=list.sort on_sort=on_sort />
                                <SortableHeaderCell label="Address" sort_field="address" sort=list.sort on_sort=on_sort min_width=240.0 />
                                <SortableHeaderCell label="City" sort_field="city" sort=list.sort on_sort=on_sort />
                                <SortableHeaderCell label="Country" sort_field="country" sort=list.sort on_sort=on_sort />
                                <TableHeaderCell min_width=140.0>"Coordinates"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                page_items.get().into_iter().map(|location| {
                                    let name_view = highlight_matches(&location.name, &query);
                                    let address_view = highlight_matches(&location.address, &query);
                                    let city_view = highlight_matches(&location.city, &query);
                                    let coordinates_text = coordinates(&location);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{name_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=type_variant(location.location_type) label=location.location_type.display_name() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{address_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{city_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{location.country.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{coordinates_text}</TableCellLayout>
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
                    empty_text="No locations registered"
                    on_reset_filters=Callback::new(move |_| list.reset_filters())
                />
            </div>
        </PageFrame>
    }
}
