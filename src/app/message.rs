// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::OrderError;
use crate::orders::SubmitOutcome;
use crate::ui::auth_tabs;
use crate::ui::booking;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::quantity;
use crate::ui::uploader;
use crate::ui::video_modal;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    AuthTabs(auth_tabs::Message),
    VideoModal(video_modal::Message),
    Booking(booking::Message),
    Uploader(uploader::Message),
    Quantity(quantity::Message),
    Notification(notifications::NotificationMessage),
    /// The order POST finished (either way).
    OrderSubmitted(Result<SubmitOutcome, OrderError>),
    /// Escape was pressed; the topmost overlay closes.
    EscapePressed,
    /// Enter was pressed on the home screen with no overlay open; the
    /// primary action (booking the featured service) activates.
    PrimaryActionActivated,
    /// Periodic tick for transient invalid flags and toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional location to open at startup (a shared link), e.g.
    /// `/accounts/auth/?tab=register`.
    pub url: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over the `SKYBOOK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `SKYBOOK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
