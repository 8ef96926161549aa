use leptos::prelude::*;

/// Контуры иконок (24x24, stroke)
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "products" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04",
            "M12 22V12",
        ],
        "bundles" => &[
            "M16.5 9.4 7.55 4.24",
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.29 7 12 12l8.71-5",
        ],
        "notifications" => &[
            "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
            "M10.3 21a1.94 1.94 0 0 0 3.4 0",
        ],
        "locations" => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        ],
        "warehouses" => &[
            "M22 8.35V20a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8.35A2 2 0 0 1 3.26 6.5l8-3.2a2 2 0 0 1 1.48 0l8 3.2A2 2 0 0 1 22 8.35Z",
            "M6 18h12",
            "M6 14h12",
        ],
        "transfers" => &["M8 3 4 7l4 4", "M4 7h16", "m16 21 4-4-4-4", "M20 17H4"],
        "plan" => &[
            "M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z",
            "M14 2v6h6",
            "M9 15h6",
        ],
        "store" => &[
            "m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7",
            "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8",
            "M2 7h20",
        ],
        "plus" => &["M12 5v14", "M5 12h14"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "delete" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
        "refresh" => &[
            "M21 12a9 9 0 0 0-9-9 9.75 9.75 0 0 0-6.74 2.74L3 8",
            "M3 3v5h5",
            "M3 12a9 9 0 0 0 9 9 9.75 9.75 0 0 0 6.74-2.74L21 16",
            "M16 16h5v5",
        ],
        "filter" => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
        "check" => &["M20 6 9 17l-5-5"],
        "arrow-up" => &["m18 15-6-6-6 6"],
        "arrow-down" => &["m6 9 6 6 6-6"],
        "chevron-left" => &["m15 18-6-6 6-6"],
        "chevron-right" => &["m9 18 6-6-6-6"],
        "chevrons-left" => &["m11 17-5-5 5-5", "m18 17-5-5 5-5"],
        "chevrons-right" => &["m6 17 5-5-5-5", "m13 17 5-5-5-5"],
        "edit" => &[
            "M12 20h9",
            "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4Z",
        ],
        _ => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
