// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Runtime language switching
//! - Fallback to default locale when translations are missing

pub mod fluent;

pub use fluent::I18n;
