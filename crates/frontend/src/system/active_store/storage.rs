use web_sys::window;

pub const ACTIVE_STORE_KEY: &str = "inventory_active_store";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Сохранить id активного магазина
pub fn save_active_store(id: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACTIVE_STORE_KEY, id);
    }
}

pub fn get_active_store() -> Option<String> {
    get_local_storage()?
        .get_item(ACTIVE_STORE_KEY)
        .ok()?
        .filter(|id| !id.is_empty())
}

pub fn clear_active_store() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACTIVE_STORE_KEY);
    }
}
