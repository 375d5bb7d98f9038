#[cfg(feature = "web")]
pub use super::web::browser::{default_base_url, AlertNotifier as PlatformNotifier};

#[cfg(all(feature = "desktop", not(feature = "web")))]
pub use super::desktop::dialog::{default_base_url, DialogNotifier as PlatformNotifier};

#[cfg(not(any(feature = "web", feature = "desktop")))]
pub use super::headless::{default_base_url, LogNotifier as PlatformNotifier};
