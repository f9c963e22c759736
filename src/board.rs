//! NodeMCU (ESP8266) numbering scheme the pin table is expressed in.
//!
//! Pin mapping reference: https://techtutorialsx.com/2017/04/02/esp8266-nodemcu-pin-mappings/
//! Labels here are for annotation only; the pin table is never derived from them.

pub const BOARD_NAME: &str = "NodeMCU (ESP8266)";

/// ESP8266 exposes GPIO0 through GPIO16.
pub const GPIO_COUNT: u8 = 17;

const SILKSCREEN_LABELS: [(u8, &str); 11] = [
    (16, "D0"),
    (5, "D1"),
    (4, "D2"),
    (0, "D3"),
    (2, "D4"),
    (14, "D5"),
    (12, "D6"),
    (13, "D7"),
    (15, "D8"),
    (3, "D9"),
    (1, "D10"),
];

pub fn is_valid_gpio(pin: u8) -> bool {
    pin < GPIO_COUNT
}

/// Returns the `D` label printed on the board for a GPIO number.
pub fn silkscreen_label(pin: u8) -> Option<&'static str> {
    SILKSCREEN_LABELS
        .iter()
        .find(|(gpio, _)| *gpio == pin)
        .map(|(_, label)| *label)
}

/// GPIO0, GPIO2 and GPIO15 are sampled at reset to select the boot mode.
pub fn has_boot_strap(pin: u8) -> bool {
    matches!(pin, 0 | 2 | 15)
}
