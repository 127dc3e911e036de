//! Post-registration success banner on the home page.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::auth::Identity;

/// How long the banner stays up.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Query key/value the sign-up flow appends to `/`.
pub const SIGNUP_MARKER_KEY: &str = "signup";
pub const SIGNUP_MARKER_VALUE: &str = "success";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignupBanner {
    visible: bool,
}

impl SignupBanner {
    /// Banner for a page load; visible only when the marker was present.
    #[must_use]
    pub fn from_marker(marker: Option<&str>) -> Self {
        Self { visible: marker == Some(SIGNUP_MARKER_VALUE) }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Advance the banner clock. Returns true when this call hid it.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.visible && elapsed >= AUTO_DISMISS {
            self.visible = false;
            return true;
        }
        false
    }
}

/// Liveness flag shared by the home page and its delayed dismiss task.
///
/// The page cancels it on cleanup; the task must not touch the banner after that.
#[derive(Clone, Debug)]
pub struct DismissGuard {
    alive: Arc<AtomicBool>,
}

impl Default for DismissGuard {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl DismissGuard {
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Timer callback: hide the banner unless the page is gone.
    /// Returns true when the banner was hidden by this call.
    pub fn dismiss(&self, banner: &mut SignupBanner) -> bool {
        self.is_alive() && banner.tick(AUTO_DISMISS)
    }
}

/// Banner copy for the current identity.
#[must_use]
pub fn banner_text(identity: &Identity) -> String {
    match identity {
        Identity::Authenticated(user) => format!("✅ 登録が完了しました！ようこそ、{}さん", user.email),
        Identity::Anonymous => "✅ 登録が完了しました！ログインして学習を始めましょう".to_owned(),
    }
}
