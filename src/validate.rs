use crate::board;
use crate::config::A4988Config;
use crate::error::{Mismatch, PinError};
use crate::pins::PinAssignment;
use tracing::{info, warn};

/// Checks that every pin exists on the board and that no pin serves two roles.
pub fn validate_assignments(assignments: &[PinAssignment]) -> Result<(), PinError> {
    for (index, assignment) in assignments.iter().enumerate() {
        if !board::is_valid_gpio(assignment.pin) {
            return Err(PinError::OutOfRange {
                role: assignment.role,
                pin: assignment.pin,
            });
        }

        if let Some(earlier) = assignments[..index]
            .iter()
            .find(|earlier| earlier.pin == assignment.pin)
        {
            return Err(PinError::DuplicatePin {
                pin: assignment.pin,
                first: earlier.role,
                second: assignment.role,
            });
        }

        if board::has_boot_strap(assignment.pin) {
            info!(
                "{} is on boot strap pin GPIO{}",
                assignment.role.signal_name(),
                assignment.pin
            );
        }
    }
    Ok(())
}

/// Roles whose wired pin differs from the compiled constant, in table order.
pub fn diff_against_compiled(config: &A4988Config) -> Vec<Mismatch> {
    config
        .assignments()
        .into_iter()
        .filter(|assignment| assignment.pin != assignment.role.pin())
        .map(|assignment| Mismatch {
            role: assignment.role,
            expected: assignment.role.pin(),
            wired: assignment.pin,
        })
        .collect()
}

/// Validates a wiring table and requires it to match the compiled constants.
pub fn verify_wiring(config: &A4988Config) -> Result<(), PinError> {
    validate_assignments(&config.assignments())?;

    let mismatches = diff_against_compiled(config);
    if mismatches.is_empty() {
        info!("Wiring matches compiled pin table");
        return Ok(());
    }

    for mismatch in &mismatches {
        warn!("{}", mismatch);
    }
    Err(PinError::WiringMismatch(mismatches))
}
