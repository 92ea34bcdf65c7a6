//! Display attributes keyed by pet status.

use super::pet::PetStatus;

/// Accent of the "all" filter chip.
pub const ALL_CHIP_COLOR: &str = "#d8693f";
/// Accent of the "my pets" filter chip.
pub const MINE_CHIP_COLOR: &str = "#FF9500";
/// Marker border for records without a known status.
pub const DEFAULT_MARKER_COLOR: &str = "#007AFF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub main: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

impl StatusStyle {
    pub fn for_status(status: PetStatus) -> Self {
        match status {
            PetStatus::Lost => StatusStyle {
                label: "Perdido",
                main: "#007FFF",
                background: "#E6F0FF",
                border: "#007FFF",
                text: "#007FFF",
            },
            PetStatus::Found => StatusStyle {
                label: "Encontrado",
                main: "#A040FB",
                background: "#F0E6FF",
                border: "#A040FB",
                text: "#A040FB",
            },
            PetStatus::Resolved => StatusStyle {
                label: "Resuelto",
                main: "#00C851",
                background: "#E6F9EF",
                border: "#00C851",
                text: "#00C851",
            },
            PetStatus::Unrecognized => StatusStyle {
                label: "Desconocido",
                main: DEFAULT_MARKER_COLOR,
                background: "#EEEEEE",
                border: "#888888",
                text: "#333333",
            },
        }
    }
}
