use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_bundle::ui::list::BundleList;
use crate::domain::a003_notification::ui::list::NotificationList;
use crate::domain::a004_location::ui::list::LocationList;
use crate::domain::a005_warehouse::ui::list::WarehouseList;
use crate::domain::a006_transfer::ui::list::TransferList;
use crate::domain::a007_custom_plan::ui::form::CustomPlanForm;
use crate::layout::global_context::{AppGlobalContext, Section};
use leptos::prelude::*;

fn render_section(section: Section) -> AnyView {
    match section {
        Section::Products => view! { <ProductList /> }.into_any(),
        Section::Bundles => view! { <BundleList /> }.into_any(),
        Section::Notifications => view! { <NotificationList /> }.into_any(),
        Section::Locations => view! { <LocationList /> }.into_any(),
        Section::Warehouses => view! { <WarehouseList /> }.into_any(),
        Section::Transfers => view! { <TransferList /> }.into_any(),
        Section::CustomPlan => view! { <CustomPlanForm /> }.into_any(),
    }
}

/// Центральная область: страница активного раздела. При смене раздела
/// страница размонтируется, и ее незавершенные запросы отбрасываются.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || render_section(ctx.active.get())}
        </div>
    }
}
