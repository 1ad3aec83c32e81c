// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent system: embedded
//! `.ftl` resources (optionally supplemented from a directory for custom
//! builds), locale resolution from CLI, config, or OS settings, and
//! formatted lookups with interpolation arguments.

pub mod fluent;
