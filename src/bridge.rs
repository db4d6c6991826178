/// Host bridge to the chrome.* extension APIs
///
/// The popup never talks to `chrome.*` directly; `popup.js` wraps each call
/// in a Promise and this module imports those wrappers. `SiteDataHost` is the
/// seam: the clear cycle is written against the trait so tests can drive it
/// with a recording mock, while the shipped popup uses `ChromeHost`.
use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::tab_data::{ActiveTab, CookieInfo, StorageArea};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getCookiesForDomain(domain: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeCookie(url: &str, name: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn clearTabStorage(tab_id: i32, area: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn unregisterServiceWorkers(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn reloadTab(tab_id: i32) -> Result<(), JsValue>;
}

/// Browser capabilities one clear cycle needs.
///
/// Popup futures are single-threaded (driven by the browser event loop), so
/// the trait is `?Send`.
#[async_trait(?Send)]
pub trait SiteDataHost {
    /// Resolve the active tab of the current window. `Ok(None)` when the
    /// query succeeds but reports no tabs.
    async fn active_tab(&self) -> Result<Option<ActiveTab>, String>;

    /// List cookies filtered by domain.
    async fn cookies_for_domain(&self, domain: &str) -> Result<Vec<CookieInfo>, String>;

    /// Remove one cookie, scoped by its reconstructed URL.
    async fn remove_cookie(&self, url: &str, name: &str) -> Result<(), String>;

    /// Run `localStorage.clear()` / `sessionStorage.clear()` inside the tab.
    async fn clear_tab_storage(&self, tab_id: i32, area: StorageArea) -> Result<(), String>;

    /// Unregister every service worker registration visible to the tab.
    async fn unregister_service_workers(&self, tab_id: i32) -> Result<(), String>;

    /// Reload the tab. Callers do not consume an outcome beyond the error.
    async fn reload_tab(&self, tab_id: i32) -> Result<(), String>;
}

/// Production host: delegates to the popup.js bridge.
pub struct ChromeHost;

#[async_trait(?Send)]
impl SiteDataHost for ChromeHost {
    async fn active_tab(&self) -> Result<Option<ActiveTab>, String> {
        let tab_js = queryActiveTab().await.map_err(describe_js_error)?;

        if tab_js.is_null() || tab_js.is_undefined() {
            return Ok(None);
        }

        let tab: ActiveTab = serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| format!("Failed to parse tab descriptor: {:?}", e))?;
        Ok(Some(tab))
    }

    async fn cookies_for_domain(&self, domain: &str) -> Result<Vec<CookieInfo>, String> {
        let cookies_js = getCookiesForDomain(domain).await.map_err(describe_js_error)?;

        serde_wasm_bindgen::from_value(cookies_js)
            .map_err(|e| format!("Failed to parse cookie list: {:?}", e))
    }

    async fn remove_cookie(&self, url: &str, name: &str) -> Result<(), String> {
        removeCookie(url, name).await.map_err(describe_js_error)
    }

    async fn clear_tab_storage(&self, tab_id: i32, area: StorageArea) -> Result<(), String> {
        clearTabStorage(tab_id, area.as_str())
            .await
            .map_err(describe_js_error)
    }

    async fn unregister_service_workers(&self, tab_id: i32) -> Result<(), String> {
        let result_js = unregisterServiceWorkers(tab_id)
            .await
            .map_err(describe_js_error)?;

        // The script reports how many registrations it touched; useful in the
        // console, not load-bearing.
        if let Ok(result) = serde_wasm_bindgen::from_value::<serde_json::Value>(result_js) {
            if let Some(count) = result.get("unregistered").and_then(|v| v.as_u64()) {
                log::debug!("{} service worker registration(s) unregistered in tab {}", count, tab_id);
            }
        }

        Ok(())
    }

    async fn reload_tab(&self, tab_id: i32) -> Result<(), String> {
        reloadTab(tab_id).await.map_err(describe_js_error)
    }
}

/// Flatten a JsValue error into a message string.
fn describe_js_error(error: JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", error))
}
