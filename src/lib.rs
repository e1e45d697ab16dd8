// SPDX-License-Identifier: MPL-2.0
//! `outcome_showcase` is a tabbed outcome showcase built with the Iced GUI
//! framework.
//!
//! Each tab pairs a short outcome label with a body of "what we fix" and
//! "how" bullets, a call-to-action and a looping background video. Exactly
//! one tab is expanded at a time; switching tabs runs a direction-aware
//! accordion transition.
//!
//! # Layers
//!
//! - [`domain`] - Selection state machine and content records (std only)
//! - [`application`] - Ports for content and navigation
//! - [`infrastructure`] - TOML content documents and the logging navigator
//! - [`ui`] - Render model, motion descriptors and iced widgets
//! - [`app`] - Window, configuration, logging and message routing

#![doc(html_root_url = "https://docs.rs/outcome_showcase/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
