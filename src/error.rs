use std::fmt;

use thiserror::Error;

use crate::pins::PinRole;

/// A role whose wired pin differs from the compiled constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub role: PinRole,
    pub expected: u8,
    pub wired: u8,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wired to GPIO{}, expected GPIO{}",
            self.role.signal_name(),
            self.wired,
            self.expected
        )
    }
}

#[derive(Debug, Error)]
pub enum PinError {
    #[error("Unknown pin role: {0}")]
    UnknownRole(String),

    #[error("{role} uses GPIO{pin}, which does not exist on this board")]
    OutOfRange { role: PinRole, pin: u8 },

    #[error("GPIO{pin} is assigned to both {first} and {second}")]
    DuplicatePin {
        pin: u8,
        first: PinRole,
        second: PinRole,
    },

    #[error("Wiring does not match compiled pin table: {}", format_mismatches(.0))]
    WiringMismatch(Vec<Mismatch>),

    #[error("Failed to read pin table (path: {path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pin table: {0}")]
    Parse(String),

    #[error("Failed to render pin table: {0}")]
    Render(String),
}

fn format_mismatches(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
