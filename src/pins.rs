use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PinError;

// Pin numbers of the A4988 stepper driver.
// Values use the NodeMCU GPIO numbering, not the D0..D10 silkscreen labels.
pub const P_N_EN: u8 = 0;
pub const P_MS1: u8 = 2;
pub const P_MS2: u8 = 4;
pub const P_MS3: u8 = 5;
pub const P_N_RST: u8 = 14;
pub const P_N_SLP: u8 = 12;
pub const P_STEP: u8 = 13;
pub const P_DIR: u8 = 15;

/// A control signal of the A4988 driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PinRole {
    Enable,
    #[serde(rename = "microstep-select-1")]
    MicrostepSelect1,
    #[serde(rename = "microstep-select-2")]
    MicrostepSelect2,
    #[serde(rename = "microstep-select-3")]
    MicrostepSelect3,
    Reset,
    Sleep,
    StepPulse,
    Direction,
}

impl PinRole {
    pub const ALL: [PinRole; 8] = [
        PinRole::Enable,
        PinRole::MicrostepSelect1,
        PinRole::MicrostepSelect2,
        PinRole::MicrostepSelect3,
        PinRole::Reset,
        PinRole::Sleep,
        PinRole::StepPulse,
        PinRole::Direction,
    ];

    /// GPIO number this role is wired to.
    pub const fn pin(self) -> u8 {
        match self {
            PinRole::Enable => P_N_EN,
            PinRole::MicrostepSelect1 => P_MS1,
            PinRole::MicrostepSelect2 => P_MS2,
            PinRole::MicrostepSelect3 => P_MS3,
            PinRole::Reset => P_N_RST,
            PinRole::Sleep => P_N_SLP,
            PinRole::StepPulse => P_STEP,
            PinRole::Direction => P_DIR,
        }
    }

    /// Signal name as printed in the A4988 datasheet.
    pub const fn signal_name(self) -> &'static str {
        match self {
            PinRole::Enable => "ENABLE",
            PinRole::MicrostepSelect1 => "MS1",
            PinRole::MicrostepSelect2 => "MS2",
            PinRole::MicrostepSelect3 => "MS3",
            PinRole::Reset => "RESET",
            PinRole::Sleep => "SLEEP",
            PinRole::StepPulse => "STEP",
            PinRole::Direction => "DIR",
        }
    }

    pub const fn role_name(self) -> &'static str {
        match self {
            PinRole::Enable => "enable",
            PinRole::MicrostepSelect1 => "microstep-select-1",
            PinRole::MicrostepSelect2 => "microstep-select-2",
            PinRole::MicrostepSelect3 => "microstep-select-3",
            PinRole::Reset => "reset",
            PinRole::Sleep => "sleep",
            PinRole::StepPulse => "step-pulse",
            PinRole::Direction => "direction",
        }
    }

    pub const fn constant_name(self) -> &'static str {
        match self {
            PinRole::Enable => "P_N_EN",
            PinRole::MicrostepSelect1 => "P_MS1",
            PinRole::MicrostepSelect2 => "P_MS2",
            PinRole::MicrostepSelect3 => "P_MS3",
            PinRole::Reset => "P_N_RST",
            PinRole::Sleep => "P_N_SLP",
            PinRole::StepPulse => "P_STEP",
            PinRole::Direction => "P_DIR",
        }
    }

    /// Enable, reset and sleep are asserted by driving the line low.
    pub const fn is_active_low(self) -> bool {
        matches!(self, PinRole::Enable | PinRole::Reset | PinRole::Sleep)
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_active_low() {
            write!(f, "{} (active low)", self.role_name())
        } else {
            write!(f, "{}", self.role_name())
        }
    }
}

impl FromStr for PinRole {
    type Err = PinError;

    /// Accepts the datasheet signal name, the role name or the constant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PinRole::ALL
            .into_iter()
            .find(|role| {
                wanted.eq_ignore_ascii_case(role.signal_name())
                    || wanted.eq_ignore_ascii_case(role.role_name())
                    || wanted.eq_ignore_ascii_case(role.constant_name())
            })
            .ok_or_else(|| PinError::UnknownRole(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinAssignment {
    pub role: PinRole,
    pub pin: u8,
}

impl PinAssignment {
    pub const fn compiled(role: PinRole) -> Self {
        PinAssignment {
            role,
            pin: role.pin(),
        }
    }
}

impl fmt::Display for PinAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} GPIO{}", self.role.signal_name(), self.pin)
    }
}

pub const PIN_TABLE: [PinAssignment; 8] = [
    PinAssignment::compiled(PinRole::Enable),
    PinAssignment::compiled(PinRole::MicrostepSelect1),
    PinAssignment::compiled(PinRole::MicrostepSelect2),
    PinAssignment::compiled(PinRole::MicrostepSelect3),
    PinAssignment::compiled(PinRole::Reset),
    PinAssignment::compiled(PinRole::Sleep),
    PinAssignment::compiled(PinRole::StepPulse),
    PinAssignment::compiled(PinRole::Direction),
];

pub const fn pin_for(role: PinRole) -> u8 {
    role.pin()
}

/// Reverse lookup: the role wired to a GPIO number, if any.
pub fn role_for(pin: u8) -> Option<PinRole> {
    PIN_TABLE
        .iter()
        .find(|assignment| assignment.pin == pin)
        .map(|assignment| assignment.role)
}
