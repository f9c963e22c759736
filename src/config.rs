use crate::error::PinError;
use crate::pins::{self, PinAssignment, PinRole};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Environment variable naming a wiring file to check against the compiled table.
pub const PIN_TABLE_PATH_ENV: &str = "A4988_PIN_TABLE";

/// Serializable view of the pin table, one field per A4988 signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct A4988Config {
    pub enable_pin: u8,
    pub ms1_pin: u8,
    pub ms2_pin: u8,
    pub ms3_pin: u8,
    pub reset_pin: u8,
    pub sleep_pin: u8,
    pub step_pin: u8,
    pub dir_pin: u8,
}

impl Default for A4988Config {
    fn default() -> Self {
        A4988Config {
            enable_pin: pins::P_N_EN,
            ms1_pin: pins::P_MS1,
            ms2_pin: pins::P_MS2,
            ms3_pin: pins::P_MS3,
            reset_pin: pins::P_N_RST,
            sleep_pin: pins::P_N_SLP,
            step_pin: pins::P_STEP,
            dir_pin: pins::P_DIR,
        }
    }
}

impl A4988Config {
    pub fn pin(&self, role: PinRole) -> u8 {
        match role {
            PinRole::Enable => self.enable_pin,
            PinRole::MicrostepSelect1 => self.ms1_pin,
            PinRole::MicrostepSelect2 => self.ms2_pin,
            PinRole::MicrostepSelect3 => self.ms3_pin,
            PinRole::Reset => self.reset_pin,
            PinRole::Sleep => self.sleep_pin,
            PinRole::StepPulse => self.step_pin,
            PinRole::Direction => self.dir_pin,
        }
    }

    pub fn assignments(&self) -> [PinAssignment; 8] {
        PinRole::ALL.map(|role| PinAssignment {
            role,
            pin: self.pin(role),
        })
    }

    pub fn to_yaml(&self) -> Result<String, PinError> {
        serde_yaml::to_string(self).map_err(|e| PinError::Render(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, PinError> {
        serde_json::to_string_pretty(self).map_err(|e| PinError::Render(e.to_string()))
    }
}

/// Parses a wiring file. JSON is accepted as well since it is valid YAML.
pub fn load_a4988_config_from_str(config_str: &str) -> Result<A4988Config, PinError> {
    serde_yaml::from_str(config_str).map_err(|e| PinError::Parse(e.to_string()))
}

pub fn load_a4988_config(config_path: &str) -> Result<A4988Config, PinError> {
    let config_str = std::fs::read_to_string(config_path).map_err(|e| {
        warn!(
            "Failed to read A4988 pin table (path: {}): {}",
            config_path, e
        );
        PinError::Read {
            path: config_path.to_string(),
            source: e,
        }
    })?;

    let config = load_a4988_config_from_str(&config_str)?;
    debug!(
        "Parsed A4988 pin table: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );
    Ok(config)
}

/// Path of the wiring file from the environment, if one is configured.
pub fn pin_table_path_from_env() -> Option<String> {
    std::env::var(PIN_TABLE_PATH_ENV)
        .ok()
        .filter(|path| !path.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_load_a4988_config_from_str() {
        let config_str = r#"
            enable_pin: 0
            ms1_pin: 2
            ms2_pin: 4
            ms3_pin: 5
            reset_pin: 14
            sleep_pin: 12
            step_pin: 13
            dir_pin: 15
        "#;

        let config = load_a4988_config_from_str(config_str).unwrap();

        assert_eq!(config.enable_pin, 0);
        assert_eq!(config.ms1_pin, 2);
        assert_eq!(config.ms2_pin, 4);
        assert_eq!(config.ms3_pin, 5);
        assert_eq!(config.reset_pin, 14);
        assert_eq!(config.sleep_pin, 12);
        assert_eq!(config.step_pin, 13);
        assert_eq!(config.dir_pin, 15);
        assert_eq!(config, A4988Config::default());
    }

    #[test]
    fn test_load_json_wiring() {
        let config_str = r#"{"enable_pin": 0, "ms1_pin": 2, "ms2_pin": 4, "ms3_pin": 5,
            "reset_pin": 14, "sleep_pin": 12, "step_pin": 16, "dir_pin": 15}"#;

        let config = load_a4988_config_from_str(config_str).unwrap();
        assert_eq!(config.pin(PinRole::StepPulse), 16);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = load_a4988_config_from_str("enable_pin: 0\nms1_pin: 2\n").unwrap_err();
        assert!(matches!(err, PinError::Parse(_)));
    }

    #[test]
    fn test_pin_out_of_u8_range_is_parse_error() {
        let config_str = r#"
            enable_pin: 300
            ms1_pin: 2
            ms2_pin: 4
            ms3_pin: 5
            reset_pin: 14
            sleep_pin: 12
            step_pin: 13
            dir_pin: 15
        "#;
        assert!(matches!(
            load_a4988_config_from_str(config_str),
            Err(PinError::Parse(_))
        ));
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let yaml = A4988Config::default().to_yaml().unwrap();
        assert!(yaml.contains("step_pin: 13"));
        assert_eq!(
            load_a4988_config_from_str(&yaml).unwrap(),
            A4988Config::default()
        );
    }

    #[test]
    fn test_default_assignments_match_pin_table() {
        assert_eq!(A4988Config::default().assignments(), pins::PIN_TABLE);
    }

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_pin_table_path_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: environment access in this module is serialized by ENV_LOCK.
        unsafe { std::env::remove_var(PIN_TABLE_PATH_ENV) };
        assert_eq!(pin_table_path_from_env(), None);

        unsafe { std::env::set_var(PIN_TABLE_PATH_ENV, "   ") };
        assert_eq!(pin_table_path_from_env(), None);

        unsafe { std::env::set_var(PIN_TABLE_PATH_ENV, "") };
        assert_eq!(pin_table_path_from_env(), None);

        unsafe { std::env::set_var(PIN_TABLE_PATH_ENV, "/etc/a4988-pins.yaml") };
        assert_eq!(
            pin_table_path_from_env(),
            Some("/etc/a4988-pins.yaml".to_string())
        );

        unsafe { std::env::remove_var(PIN_TABLE_PATH_ENV) };
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_a4988_config("/nonexistent/a4988-pins.yaml").unwrap_err();
        match err {
            PinError::Read { path, .. } => assert_eq!(path, "/nonexistent/a4988-pins.yaml"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
