use leptos::prelude::*;
use web_sys::window;

/// Раздел дашборда, открытый в центральной области
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Products,
    Bundles,
    Notifications,
    Locations,
    Warehouses,
    Transfers,
    CustomPlan,
}

impl Section {
    pub fn key(&self) -> &'static str {
        match self {
            Section::Products => "a001_product",
            Section::Bundles => "a002_bundle",
            Section::Notifications => "a003_notification",
            Section::Locations => "a004_location",
            Section::Warehouses => "a005_warehouse",
            Section::Transfers => "a006_transfer",
            Section::CustomPlan => "a007_custom_plan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Products => "Products",
            Section::Bundles => "Bundles",
            Section::Notifications => "Notifications",
            Section::Locations => "Locations",
            Section::Warehouses => "Warehouses",
            Section::Transfers => "Transfers",
            Section::CustomPlan => "Custom plan",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::Bundles => "bundles",
            Section::Notifications => "notifications",
            Section::Locations => "locations",
            Section::Warehouses => "warehouses",
            Section::Transfers => "transfers",
            Section::CustomPlan => "plan",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.key() == key)
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::Products,
            Section::Bundles,
            Section::Notifications,
            Section::Locations,
            Section::Warehouses,
            Section::Transfers,
            Section::CustomPlan,
        ]
    }
}

const SECTION_STORAGE_KEY: &str = "inventory_section";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    /// Последний открытый раздел восстанавливается из sessionStorage
    pub fn new() -> Self {
        let restored = window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item(SECTION_STORAGE_KEY).ok().flatten())
            .and_then(|key| Section::from_key(&key))
            .unwrap_or_default();

        Self {
            active: RwSignal::new(restored),
            left_open: RwSignal::new(true),
        }
    }

    /// Открыть раздел. Строка запроса принадлежит фильтрам открытого списка,
    /// поэтому при смене раздела она очищается.
    pub fn open(&self, section: Section) {
        if self.active.get_untracked() == section {
            return;
        }
        log::debug!("open section {}", section.key());

        if let Some(w) = window() {
            if let Ok(Some(storage)) = w.session_storage() {
                let _ = storage.set_item(SECTION_STORAGE_KEY, section.key());
            }
            let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
        }
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("a999_missing"), None);
    }
}
