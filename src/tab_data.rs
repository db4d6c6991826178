/// Data structures for Site Scrubber
use serde::{Deserialize, Serialize};

/// The active browser tab a clear cycle operates on.
///
/// Resolved fresh on every trigger and discarded when the cycle ends.
/// `url` is optional because the browser reports URL-less tabs (e.g. during
/// navigation); the cycle aborts before clearing when it is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveTab {
    pub id: i32,
    #[serde(default)]
    pub url: Option<String>,
}

/// A cookie as reported by the browser's cookie store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieInfo {
    pub name: String,
    pub domain: String,
    pub path: String,
    #[serde(default)]
    pub secure: bool,
}

/// Which per-tab storage area an injected script wipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageArea::Local => "local",
            StorageArea::Session => "session",
        }
    }
}

/// Result of one clearing operation.
///
/// `Cleared` means the host call completed and reported success; any error
/// along the way downgrades the operation to `Failed` without touching its
/// siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Failed,
}

impl ClearOutcome {
    pub fn is_cleared(self) -> bool {
        matches!(self, ClearOutcome::Cleared)
    }
}

/// Consolidated result of one clear cycle, one flag per data category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearSummary {
    pub cookies: ClearOutcome,
    pub local_storage: ClearOutcome,
    pub session_storage: ClearOutcome,
    pub service_workers: ClearOutcome,
}

impl ClearSummary {
    /// The four outcome flags in presentation order.
    pub fn entries(&self) -> [(&'static str, ClearOutcome); 4] {
        [
            ("Cookies", self.cookies),
            ("Local storage", self.local_storage),
            ("Session storage", self.session_storage),
            ("Service workers", self.service_workers),
        ]
    }

    pub fn all_cleared(&self) -> bool {
        self.entries().iter().all(|(_, outcome)| outcome.is_cleared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_deserializes_browser_payload() {
        let tab: ActiveTab =
            serde_json::from_str(r#"{"id": 42, "url": "https://example.com/"}"#).unwrap();

        assert_eq!(tab.id, 42);
        assert_eq!(tab.url.as_deref(), Some("https://example.com/"));
    }

    #[test]
    fn test_active_tab_tolerates_missing_url() {
        let tab: ActiveTab = serde_json::from_str(r#"{"id": 7}"#).unwrap();

        assert_eq!(tab.id, 7);
        assert_eq!(tab.url, None);
    }

    #[test]
    fn test_cookie_secure_defaults_to_false() {
        // chrome.cookies payloads omit nothing in practice, but the bridge
        // contract only promises name/domain/path.
        let cookie: CookieInfo =
            serde_json::from_str(r#"{"name": "sid", "domain": "example.com", "path": "/"}"#)
                .unwrap();

        assert!(!cookie.secure);
    }

    #[test]
    fn test_cookie_serialization_round_trip() {
        let cookie = CookieInfo {
            name: "sid".to_string(),
            domain: ".example.com".to_string(),
            path: "/cart".to_string(),
            secure: true,
        };

        let json = serde_json::to_string(&cookie).unwrap();
        let deserialized: CookieInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, cookie);
    }

    #[test]
    fn test_summary_entries_order() {
        let summary = ClearSummary {
            cookies: ClearOutcome::Cleared,
            local_storage: ClearOutcome::Failed,
            session_storage: ClearOutcome::Cleared,
            service_workers: ClearOutcome::Failed,
        };

        let labels: Vec<&str> = summary.entries().iter().map(|(label, _)| *label).collect();

        assert_eq!(
            labels,
            vec!["Cookies", "Local storage", "Session storage", "Service workers"]
        );
    }

    #[test]
    fn test_summary_all_cleared() {
        let all_good = ClearSummary {
            cookies: ClearOutcome::Cleared,
            local_storage: ClearOutcome::Cleared,
            session_storage: ClearOutcome::Cleared,
            service_workers: ClearOutcome::Cleared,
        };
        assert!(all_good.all_cleared());

        let one_bad = ClearSummary {
            service_workers: ClearOutcome::Failed,
            ..all_good
        };
        assert!(!one_bad.all_cleared());
    }

    #[test]
    fn test_storage_area_labels() {
        assert_eq!(StorageArea::Local.as_str(), "local");
        assert_eq!(StorageArea::Session.as_str(), "session");
    }
}
