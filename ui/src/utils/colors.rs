//! Shared color constants for the UI.

use egui::Color32;

/// Red color for load and configuration errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Text drawn on top of severity badges and tag chips.
pub const COLOR_ON_BADGE: Color32 = Color32::WHITE;

/// Subtle gray for table and detail panel borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
