//! Props shared by every routed page.

use crate::core::config::UiConfig;
use crate::models::ToastKind;
use yew::prelude::*;

/// Toast request emitted by pages.
pub(crate) type ToastRequest = (ToastKind, String);

#[derive(Properties, PartialEq, Clone)]
pub(crate) struct PageProps {
    /// Requests a path change from the router.
    pub on_navigate: Callback<String>,
    /// Shows a toast in the shell.
    pub on_show_toast: Callback<ToastRequest>,
}

/// Config from the app-level provider, defaulting when rendered standalone.
#[hook]
pub(crate) fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
