use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge badge--primary",
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Warning => "badge badge--warning",
            BadgeVariant::Error => "badge badge--error",
            BadgeVariant::Neutral => "badge badge--neutral",
        }
    }
}

/// Бейдж статуса в строке таблицы
#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! { <span class=variant.class()>{label}</span> }
}
