// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern. Each widget owns its
//! state, exposes a `Message` enum and a `handle` function, and reports
//! cross-component consequences as explicit effects the application executes.
//!
//! # Widgets
//!
//! - [`auth_tabs`] - Login/register tab switcher with password visibility toggles
//! - [`video_modal`] - Promo video modal with paired playback handover
//! - [`booking`] - Two-step booking wizard posting one order request
//! - [`uploader`] - Image picker with drag-and-drop and a clearable preview
//! - [`quantity`] - Numeric stepper honoring min/max/step
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode management
//! - [`icons`] - Text glyph primitives
//! - [`navbar`] - Section navigation bar
//! - [`notifications`] - Toast notification system for user feedback

pub mod auth_tabs;
pub mod booking;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod quantity;
pub mod theming;
pub mod uploader;
pub mod video_modal;
