//! Current user and the logout flow.
//!
//! The panel never looks identity up globally; it receives an
//! [`IdentityService`] from whoever builds it.

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::error::SessionError;
use crate::navigation::Navigator;

pub const FALLBACK_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub full_name: String,
    pub username: String,
}

/// First word of the full name, or "User".
pub fn short_name(user: Option<&CurrentUser>) -> &str {
    user.and_then(|u| u.full_name.split_whitespace().next())
        .unwrap_or(FALLBACK_NAME)
}

/// Name handed to the avatar resolver.
pub fn avatar_name(user: Option<&CurrentUser>) -> &str {
    match user {
        Some(u) if !u.full_name.trim().is_empty() => u.full_name.as_str(),
        _ => FALLBACK_NAME,
    }
}

pub fn handle(user: Option<&CurrentUser>) -> Option<String> {
    user.map(|u| format!("@{}", u.username))
}

pub trait IdentityService: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;

    /// A single attempt; no retry, no timeout.
    fn logout(&self) -> LocalBoxFuture<'static, Result<(), SessionError>>;
}

/// End the session, then go to the login view.
///
/// On failure nothing is navigated and the error is handed back for display.
pub async fn sign_out<I, N>(
    identity: &I,
    navigator: &N,
    login_path: &str,
) -> Result<(), SessionError>
where
    I: IdentityService + ?Sized,
    N: Navigator + ?Sized,
{
    tracing::info!("signing out");
    if let Err(e) = identity.logout().await {
        tracing::error!(error = %e, "logout failed, staying on current page");
        return Err(e);
    }
    navigator.navigate_to(login_path);
    Ok(())
}

/// [`IdentityService`] talking to the dashboard backend.
#[derive(Clone)]
pub struct HttpIdentity {
    me_url: String,
    logout_url: String,
    user: RwSignal<Option<CurrentUser>>,
}

impl HttpIdentity {
    pub fn new(me_url: String, logout_url: String) -> Self {
        Self {
            me_url,
            logout_url,
            user: RwSignal::new(None),
        }
    }

    /// Load the signed-in user in the background.
    pub fn refresh(&self) {
        let url = self.me_url.clone();
        let user = self.user;
        spawn_local(async move {
            match api::fetch_current_user(&url).await {
                Ok(found) => user.set(found),
                Err(e) => {
                    let err = SessionError::CurrentUser(e.to_string());
                    tracing::warn!(error = %err, "showing anonymous user");
                }
            }
        });
    }
}

impl IdentityService for HttpIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.get()
    }

    fn logout(&self) -> LocalBoxFuture<'static, Result<(), SessionError>> {
        let url = self.logout_url.clone();
        let user = self.user;
        async move {
            api::logout(&url)
                .await
                .map_err(|e| SessionError::Logout(e.to_string()))?;
            user.set(None);
            Ok::<(), SessionError>(())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::executor::block_on;

    use super::*;
    use crate::navigation::testing::RecordingNavigator;

    struct FakeIdentity {
        user: Option<CurrentUser>,
        fail_with: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FakeIdentity {
        fn succeeding() -> Self {
            Self {
                user: Some(ada()),
                fail_with: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(reason: &'static str) -> Self {
            Self {
                fail_with: Some(reason),
                ..Self::succeeding()
            }
        }
    }

    impl IdentityService for FakeIdentity {
        fn current_user(&self) -> Option<CurrentUser> {
            self.user.clone()
        }

        fn logout(&self) -> LocalBoxFuture<'static, Result<(), SessionError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = match self.fail_with {
                Some(reason) => Err(SessionError::Logout(reason.to_string())),
                None => Ok(()),
            };
            async move { outcome }.boxed_local()
        }
    }

    fn ada() -> CurrentUser {
        CurrentUser {
            full_name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
        }
    }

    #[test]
    fn test_successful_logout_goes_to_login() {
        let identity = FakeIdentity::succeeding();
        let navigator = RecordingNavigator::at("/dashboard");

        block_on(sign_out(&identity, &navigator, "/login")).expect("logout should succeed");

        assert_eq!(identity.calls.load(Ordering::SeqCst), 1);
        assert_eq!(navigator.visited(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_failed_logout_blocks_navigation() {
        let identity = FakeIdentity::failing("503 from backend");
        let navigator = RecordingNavigator::at("/dashboard");

        let err = block_on(sign_out(&identity, &navigator, "/login")).unwrap_err();

        assert_eq!(identity.calls.load(Ordering::SeqCst), 1);
        assert!(navigator.visited().is_empty());
        assert_eq!(err.to_string(), "Logout failed: 503 from backend");
    }

    #[test]
    fn test_sign_out_through_trait_objects() {
        let identity = FakeIdentity::succeeding();
        let navigator = RecordingNavigator::at("/settings");
        let dyn_identity: &dyn IdentityService = &identity;
        let dyn_navigator: &dyn Navigator = &navigator;

        block_on(sign_out(dyn_identity, dyn_navigator, "/signin")).expect("logout should succeed");
        assert_eq!(navigator.visited(), vec!["/signin".to_string()]);
        assert_eq!(dyn_identity.current_user(), Some(ada()));
    }

    #[test]
    fn test_short_name_is_first_word() {
        assert_eq!(short_name(Some(&ada())), "Ada");
    }

    #[test]
    fn test_short_name_falls_back() {
        assert_eq!(short_name(None), "User");
        let blank = CurrentUser {
            full_name: "   ".to_string(),
            username: "ghost".to_string(),
        };
        assert_eq!(short_name(Some(&blank)), "User");
        assert_eq!(avatar_name(Some(&blank)), "User");
    }

    #[test]
    fn test_avatar_name_uses_full_name() {
        assert_eq!(avatar_name(Some(&ada())), "Ada Lovelace");
        assert_eq!(avatar_name(None), "User");
    }

    #[test]
    fn test_handle_only_with_user() {
        assert_eq!(handle(Some(&ada())), Some("@ada".to_string()));
        assert_eq!(handle(None), None);
    }

    #[test]
    fn test_user_parses_camel_case() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"fullName": "Ada Lovelace", "username": "ada"}"#)
                .expect("should parse");
        assert_eq!(user, ada());
    }
}
