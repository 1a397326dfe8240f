//! Trigger severity levels and their stock labels and colors.

use egui::Color32;

/// Severity ordinal as defined by the monitoring backend (`priority` 0..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    NotClassified,
    Information,
    Warning,
    Average,
    High,
    Disaster,
}

impl Severity {
    pub const ALL: [Self; 6] = [
        Self::NotClassified,
        Self::Information,
        Self::Warning,
        Self::Average,
        Self::High,
        Self::Disaster,
    ];

    pub fn from_priority(priority: u8) -> Option<Self> {
        Self::ALL.get(usize::from(priority)).copied()
    }

    /// Label used when a record arrives without one.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::NotClassified => "Not classified",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Average => "Average",
            Self::High => "High",
            Self::Disaster => "Disaster",
        }
    }

    pub fn default_color(self) -> Color32 {
        match self {
            Self::NotClassified => Color32::from_rgb(0xB7, 0xDB, 0xAB),
            Self::Information => Color32::from_rgb(0x82, 0xB5, 0xD8),
            Self::Warning => Color32::from_rgb(0xE5, 0xAC, 0x0E),
            Self::Average => Color32::from_rgb(0xC1, 0x5C, 0x17),
            Self::High => Color32::from_rgb(0xBF, 0x1B, 0x00),
            Self::Disaster => Color32::from_rgb(0x89, 0x0F, 0x02),
        }
    }
}
