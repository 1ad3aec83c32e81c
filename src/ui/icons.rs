// SPDX-License-Identifier: MPL-2.0
//! Centralized glyph module.
//!
//! Text glyphs keep rendering consistent across platforms without shipping
//! an icon atlas; every visual symbol used by the widgets lives here so the
//! choice can be revisited in one place.

use crate::ui::notifications::Severity;

/// Dismiss / close control.
pub const CROSS: &str = "\u{2715}"; // ✕

/// Remove-image control on the uploader preview.
pub const REMOVE: &str = "\u{00D7}"; // ×

/// Password masked (click to reveal).
pub const EYE_OPEN: &str = "\u{1F441}"; // 👁

/// Password shown in plain text (click to mask again).
pub const EYE_CLOSED: &str = "\u{2298}"; // ⊘

/// Playback state indicators for video surfaces.
pub const PLAY: &str = "\u{25B6}"; // ▶
pub const PAUSE: &str = "\u{23F8}"; // ⏸

/// Stepper controls.
pub const MINUS: &str = "\u{2212}"; // −
pub const PLUS: &str = "+";

/// Upload affordance shown in the drop-zone.
pub const UPLOAD: &str = "\u{2B06}"; // ⬆

/// Returns the status glyph for a notification severity.
pub fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "\u{2713}", // ✓
        Severity::Info => "\u{2139}",    // ℹ
        Severity::Warning => "\u{26A0}", // ⚠
        Severity::Error => "\u{2716}",   // ✖
    }
}
