// SPDX-License-Identifier: MPL-2.0
//! `skybook` is a desktop booking client for an airport-transfer and car
//! rental service, built with the Iced GUI framework.
//!
//! It fronts a server-rendered web application: tabbed login/register,
//! a promo video modal, a two-step booking wizard that posts orders as
//! JSON, an image uploader with drag-and-drop, and a quantity stepper.
//! The server owns accounts, orders, and storage; the client drives them
//! through the documented request contract.

#![doc(html_root_url = "https://docs.rs/skybook/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod location;
pub mod orders;
pub mod paths;
pub mod session;
pub mod ui;
