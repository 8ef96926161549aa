/// Утилиты для списков: поле поиска, подсветка совпадений, индикаторы сортировки
use crate::shared::config::config;
use chrono::{DateTime, Local, Utc};
use contracts::shared::collection::SortSpec;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Байтовые диапазоны совпадений `filter` в `text` без учета регистра.
///
/// Поиск идет по символам, поэтому диапазоны всегда на границах символов
/// исходной строки, даже если нижний регистр меняет длину в байтах.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let lowered: Vec<char> = chars
        .iter()
        .map(|(_, c)| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= lowered.len() {
        if lowered[i..i + needle.len()] == needle[..] {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map(|(pos, _)| *pos)
                .unwrap_or(text.len());
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // замена таймера отменяет предыдущий
        let timeout = Timeout::new(config().search_debounce_ms, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Дата-время в локальной зоне браузера, до минут
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => {
            if spec.is_ascending() {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// CSS класс индикатора сортировки
pub fn get_sort_class(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => "sort-icon active",
        _ => "sort-icon",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Laptop Pro X1", "pro"), vec![(7, 10)]);
        assert_eq!(match_ranges("LP-X1-2024", "x1"), vec![(3, 5)]);
        assert_eq!(match_ranges("abcabc", "ABC"), vec![(0, 3), (3, 6)]);
        assert!(match_ranges("Laptop", "  ").is_empty());
        assert!(match_ranges("Laptop", "mouse").is_empty());
    }

    #[test]
    fn test_match_ranges_multibyte() {
        let text = "Ноутбук Pro";
        let ranges = match_ranges(text, "бук");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "бук");
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::desc("price");
        assert_eq!(get_sort_indicator(Some(&spec), "price"), " ▼");
        assert_eq!(get_sort_indicator(Some(&spec), "name"), " ⇅");
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");
        assert_eq!(get_sort_class(Some(&SortSpec::asc("name")), "name"), "sort-icon active");
    }
}
