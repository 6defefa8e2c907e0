//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod dialogs;
pub mod forms;
pub mod header;
pub mod tables;
