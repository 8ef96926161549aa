//! Настройки фронтенда.
//!
//! Значения задаются при сборке через переменные окружения
//! (`INVENTORY_API_PORT`, `INVENTORY_PAGE_SIZE`, `INVENTORY_SEARCH_DEBOUNCE_MS`),
//! иначе используются встроенные значения по умолчанию.

use once_cell::sync::Lazy;

const DEFAULT_API_PORT: u16 = 3000;
const DEFAULT_PAGE_SIZE: usize = 50;
const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Порт backend API на том же хосте, что и фронтенд
    pub api_port: u16,
    /// Размер страницы списков по умолчанию
    pub default_page_size: usize,
    /// Задержка поиска после ввода
    pub search_debounce_ms: u32,
}

impl AppConfig {
    fn from_build_env() -> Self {
        Self::from_values(
            option_env!("INVENTORY_API_PORT"),
            option_env!("INVENTORY_PAGE_SIZE"),
            option_env!("INVENTORY_SEARCH_DEBOUNCE_MS"),
        )
    }

    fn from_values(port: Option<&str>, page_size: Option<&str>, debounce: Option<&str>) -> Self {
        Self {
            api_port: parse_or(port, DEFAULT_API_PORT),
            default_page_size: parse_or(page_size, DEFAULT_PAGE_SIZE).max(1),
            search_debounce_ms: parse_or(debounce, DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::from_build_env();
    log::debug!("app config: {:?}", config);
    config
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(Some("8080"), Some("zero"), Some(" 150 "));
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.search_debounce_ms, 150);

        let config = AppConfig::from_values(None, Some("0"), None);
        assert_eq!(config.default_page_size, 1);
    }
}
