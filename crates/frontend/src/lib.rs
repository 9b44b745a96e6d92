pub mod app;
pub mod dashboards;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // Логи в консоль браузера через `log`
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

#[cfg(test)]
mod tests {
    /// Кнопки, таблицы, бейджи и спиннер рисует thaw; в стилях только разметка
    #[test]
    fn test_stylesheet_has_no_widget_rules() {
        let css = include_str!("../styles/app.css");
        for selector in [".btn", ".badge", ".chip", ".data-table", ".spinner", ".card {"] {
            assert!(!css.contains(selector), "widget rule {} in app.css", selector);
        }
        assert!(css.contains(".app-layout"));
        assert!(css.contains(".insight-panel"));
    }
}
