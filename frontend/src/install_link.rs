//! Loading the GitHub App installation link that drives the hero's
//! "Start Now" button.
//!
//! The link is fetched once when the nav/hero component mounts. Until a usable
//! URL arrives the button stays inert; a failed fetch leaves it inert for the
//! rest of the page view.

use std::cell::Cell;
use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::utils::api::{Api, FetchError};

pub const APP_INFO_PATH: &str = "/api/github-app-info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GithubAppInfo {
    pub installation_url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InstallationLink {
    #[default]
    Pending,
    Ready(String),
    Unavailable,
}

impl InstallationLink {
    /// Failures go to the console error channel (wasm-logger maps `log::error!`
    /// to `console.error`) and leave the link unavailable for this page view.
    pub fn from_response(response: Result<GithubAppInfo, FetchError>) -> Self {
        match validate(response) {
            Ok(url) => {
                log::info!("Installation link loaded: {}", url);
                InstallationLink::Ready(url)
            }
            Err(e) => {
                log::error!("Failed to fetch GitHub App info: {}", e);
                InstallationLink::Unavailable
            }
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            InstallationLink::Ready(url) => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.url().is_some()
    }
}

/// A blank `installation_url` is as useless as a missing one.
pub fn validate(response: Result<GithubAppInfo, FetchError>) -> Result<String, FetchError> {
    let info = response?;
    let url = info.installation_url.trim();
    if url.is_empty() {
        return Err(FetchError::Malformed("installation_url is empty".to_string()));
    }
    Ok(url.to_string())
}

/// What the primary call-to-action anchor should render for a given link state.
#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
    pub class: &'static str,
    pub inert: bool,
}

impl From<&InstallationLink> for CallToAction {
    fn from(link: &InstallationLink) -> Self {
        let inert = !link.is_navigable();
        let href = link.url().unwrap_or("#").to_string();
        Self {
            href,
            target: "_blank",
            rel: "noopener noreferrer",
            class: if inert { "cta-link pointer-events-none" } else { "cta-link" },
            inert,
        }
    }
}

/// Tracks whether the component that started a fetch is still mounted.
#[derive(Debug, Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn mounted() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }
}

/// Fire the one-shot config fetch. `on_done` only runs while `guard` is live.
pub fn load_installation_link(guard: MountGuard, on_done: Callback<InstallationLink>) {
    spawn_local(async move {
        let response = Api::get(APP_INFO_PATH)
            .header("Accept", "application/json")
            .fetch_json::<GithubAppInfo>()
            .await;
        let link = InstallationLink::from_response(response);
        if guard.is_mounted() {
            on_done.emit(link);
        } else {
            log::debug!("Dropping installation link result, component unmounted");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::api::decode_json;

    #[test]
    fn successful_fetch_makes_link_navigable() {
        let info = decode_json::<GithubAppInfo>(r#"{"installation_url": "https://example.com/install"}"#);
        let link = InstallationLink::from_response(info);
        assert_eq!(link, InstallationLink::Ready("https://example.com/install".to_string()));

        let cta = CallToAction::from(&link);
        assert_eq!(cta.href, "https://example.com/install");
        assert!(!cta.inert);
        assert_eq!(cta.class, "cta-link");
    }

    #[test]
    fn pending_link_is_inert() {
        let link = InstallationLink::default();
        assert_eq!(link, InstallationLink::Pending);
        assert!(!link.is_navigable());

        let cta = CallToAction::from(&link);
        assert!(cta.inert);
        assert_eq!(cta.href, "#");
        assert!(cta.class.contains("pointer-events-none"));
    }

    #[test]
    fn network_failure_stays_inert() {
        let link = InstallationLink::from_response(Err(FetchError::Network("offline".to_string())));
        assert_eq!(link, InstallationLink::Unavailable);
        assert!(CallToAction::from(&link).inert);
    }

    #[test]
    fn error_status_stays_inert() {
        let link = InstallationLink::from_response(Err(FetchError::Status(503)));
        assert!(!link.is_navigable());
    }

    #[test]
    fn missing_field_is_malformed() {
        let parsed = decode_json::<GithubAppInfo>(r#"{"app_slug": "codeboss"}"#);
        assert!(matches!(parsed, Err(FetchError::Malformed(_))));
        assert_eq!(InstallationLink::from_response(parsed), InstallationLink::Unavailable);
    }

    #[test]
    fn blank_url_is_malformed() {
        let parsed = decode_json::<GithubAppInfo>(r#"{"installation_url": "  "}"#);
        assert!(parsed.is_ok());
        assert!(matches!(validate(parsed), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn blank_url_response_leaves_button_inert() {
        let link = InstallationLink::from_response(Ok(GithubAppInfo {
            installation_url: String::new(),
        }));
        assert_eq!(link, InstallationLink::Unavailable);
        assert!(CallToAction::from(&link).inert);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let parsed = decode_json::<GithubAppInfo>(
            r#"{"installation_url": "https://github.com/apps/x/installations/new", "app_slug": "x"}"#,
        )
        .unwrap();
        assert_eq!(parsed.installation_url, "https://github.com/apps/x/installations/new");
    }

    #[test]
    fn new_tab_without_opener_or_referrer() {
        let cta = CallToAction::from(&InstallationLink::Ready("https://example.com".to_string()));
        assert_eq!(cta.target, "_blank");
        assert_eq!(cta.rel, "noopener noreferrer");
    }

    #[test]
    fn new_guard_starts_mounted() {
        assert!(MountGuard::mounted().is_mounted());
    }

    #[test]
    fn guard_reports_unmount_to_every_clone() {
        let guard = MountGuard::mounted();
        let held_by_task = guard.clone();
        assert!(held_by_task.is_mounted());
        guard.unmount();
        assert!(!held_by_task.is_mounted());
    }
}
