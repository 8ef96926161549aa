use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::active_store::ActiveStoreProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <ActiveStoreProvider>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Center /> }.into_any()
            />
            <ToastHost />
        </ActiveStoreProvider>
    }
}
