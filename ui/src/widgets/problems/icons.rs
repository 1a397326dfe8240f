//! Glyphs used by the problems table. All of them are in egui's default
//! emoji font.

pub const CLOCK: &str = "🕓";
pub const THERMOMETER: &str = "🌡";
pub const NOTES: &str = "🗒";
pub const REPEATED_EVENT: &str = "📢";
pub const ACKNOWLEDGES: &str = "↩";
pub const DATASOURCE: &str = "🛢";
pub const PROXY: &str = "☁";
pub const GROUPS: &str = "📁";
pub const MAINTENANCE: &str = "🔧";
pub const INFO: &str = "ℹ";
