/// Clear-cycle orchestration for Site Scrubber
///
/// One user click drives one cycle: resolve the active tab, derive its host,
/// run the four clearing operations independently, hand back a summary, and
/// optionally reload the tab. Operation errors are downgraded to a `Failed`
/// flag for that operation only; precondition errors abort the whole cycle
/// before anything is cleared.
use thiserror::Error;

use crate::bridge::SiteDataHost;
use crate::domain::{cookie_removal_url, host_for_url};
use crate::tab_data::{ClearOutcome, ClearSummary, StorageArea};

/// Conditions that abort a cycle before any clearing is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClearError {
    #[error("Tab query failed: {0}")]
    TabQuery(String),

    #[error("No active tab in the current window")]
    NoActiveTab,

    #[error("Active tab has no URL")]
    MissingUrl,

    #[error("Cannot parse tab URL: {0}")]
    BadUrl(String),
}

/// Run one clear cycle against the given host.
///
/// The reload toggle is sampled by the caller at trigger time and passed in
/// as a plain parameter; a requested reload fires after all four operations
/// have completed, regardless of their outcomes.
pub async fn execute_clear<H: SiteDataHost>(
    host: &H,
    reload_requested: bool,
) -> Result<ClearSummary, ClearError> {
    let tab = host
        .active_tab()
        .await
        .map_err(ClearError::TabQuery)?
        .ok_or(ClearError::NoActiveTab)?;

    let url = tab
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(ClearError::MissingUrl)?;

    let site = host_for_url(url).ok_or_else(|| ClearError::BadUrl(url.to_string()))?;

    log::info!("Clearing site data for {} (tab {})", site, tab.id);

    let summary = ClearSummary {
        cookies: clear_cookies(host, &site).await,
        local_storage: clear_storage(host, tab.id, StorageArea::Local).await,
        session_storage: clear_storage(host, tab.id, StorageArea::Session).await,
        service_workers: clear_service_workers(host, tab.id).await,
    };

    if reload_requested {
        log::info!("Reloading tab {}", tab.id);
        if let Err(e) = host.reload_tab(tab.id).await {
            log::warn!("Tab reload failed: {}", e);
        }
    }

    Ok(summary)
}

/// Remove every cookie the store lists for the site.
///
/// A lookup error fails the operation outright; a removal error marks it
/// failed but the remaining cookies are still attempted.
async fn clear_cookies<H: SiteDataHost>(host: &H, site: &str) -> ClearOutcome {
    let cookies = match host.cookies_for_domain(site).await {
        Ok(cookies) => cookies,
        Err(e) => {
            log::warn!("Cookie lookup for {} failed: {}", site, e);
            return ClearOutcome::Failed;
        }
    };

    log::debug!("{} cookie(s) found for {}", cookies.len(), site);

    let mut failures = 0;
    for cookie in &cookies {
        let url = cookie_removal_url(cookie);
        log::debug!("Removing cookie {} from {}", cookie.name, url);

        if let Err(e) = host.remove_cookie(&url, &cookie.name).await {
            log::warn!("Failed to remove cookie {}: {}", cookie.name, e);
            failures += 1;
        }
    }

    if failures == 0 {
        ClearOutcome::Cleared
    } else {
        ClearOutcome::Failed
    }
}

async fn clear_storage<H: SiteDataHost>(host: &H, tab_id: i32, area: StorageArea) -> ClearOutcome {
    match host.clear_tab_storage(tab_id, area).await {
        Ok(()) => ClearOutcome::Cleared,
        Err(e) => {
            log::warn!("Clearing {} storage in tab {} failed: {}", area.as_str(), tab_id, e);
            ClearOutcome::Failed
        }
    }
}

async fn clear_service_workers<H: SiteDataHost>(host: &H, tab_id: i32) -> ClearOutcome {
    match host.unregister_service_workers(tab_id).await {
        Ok(()) => ClearOutcome::Cleared,
        Err(e) => {
            log::warn!("Unregistering service workers in tab {} failed: {}", tab_id, e);
            ClearOutcome::Failed
        }
    }
}
