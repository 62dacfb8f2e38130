//! Thin wrappers over the browser APIs the shell touches.
//!
//! Failures are logged to the console and degrade to a sensible default; none of
//! these calls are allowed to break rendering.

use crate::core::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub(crate) fn location_path() -> String {
    window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

pub(crate) fn location_origin() -> Option<String> {
    window().location().origin().ok()
}

pub(crate) fn push_history(path: &str) {
    let pushed = window()
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(err) = pushed {
        console::error!("history push failed", path.to_string(), err);
    }
}

pub(crate) fn set_document_title(title: &str) {
    document().set_title(&format!("{title} · ScholarFlow"));
}

pub(crate) fn apply_theme(theme: ThemeMode) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            console::error!("theme attribute update failed", err);
        }
    }
}

fn media_matches(query: &str) -> bool {
    matches!(window().match_media(query), Ok(Some(list)) if list.matches())
}

pub(crate) fn initial_theme(fallback: ThemeMode) -> ThemeMode {
    ThemeMode::from_color_scheme(
        media_matches("(prefers-color-scheme: dark)"),
        media_matches("(prefers-color-scheme: light)"),
        fallback,
    )
}

pub(crate) fn load_config() -> UiConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("ignoring embedded UI config", err.to_string());
            UiConfig::default()
        }
    }
}

/// Writes text through `navigator.clipboard.writeText`.
pub(crate) async fn copy_text(text: &str) -> Result<(), JsValue> {
    let navigator = window().navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()?;
    JsFuture::from(promise).await.map(|_| ())
}
