//! Tuning values for the pinch adapters and the prevent-default switch.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::PinchError;

/// Lower bound of a single trackpad factor.
pub const MIN_FACTOR: f64 = 0.125;
/// Upper bound of a single trackpad factor.
pub const MAX_FACTOR: f64 = 4.0;
/// Wheel delta (in pixels) that corresponds to a factor change of 1.
pub const WHEEL_DELTA_DIVISOR: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinchConfig {
    pub min_factor: f64,
    pub max_factor: f64,
    pub wheel_delta_divisor: f64,
    /// Treat a meta (cmd) modified wheel like a ctrl modified one.
    pub meta_key_pinch: bool,
    /// End a touch session when a move arrives with fewer than two contacts.
    /// Covers hosts that swallow the touch-end.
    pub end_on_contact_loss: bool,
    /// Register listeners in the capture phase.
    pub capture: bool,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            min_factor: MIN_FACTOR,
            max_factor: MAX_FACTOR,
            wheel_delta_divisor: WHEEL_DELTA_DIVISOR,
            meta_key_pinch: false,
            end_on_contact_loss: false,
            capture: false,
        }
    }
}

impl PinchConfig {
    /// Parses a config from JSON. Missing fields take their default value.
    pub fn from_json(raw: &str) -> Result<Self, PinchError> {
        let config: PinchConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, PinchError> {
        Ok(serde_json::to_string(self)?)
    }

    /// This config if it validates, otherwise the defaults.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                log::warn!("{err}, using default pinch config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), PinchError> {
        if !(self.min_factor.is_finite() && self.min_factor > 0.0) {
            return Err(PinchError::InvalidConfig(format!(
                "min_factor must be finite and positive, got {}",
                self.min_factor
            )));
        }
        if !(self.max_factor.is_finite() && self.max_factor > 0.0) {
            return Err(PinchError::InvalidConfig(format!(
                "max_factor must be finite and positive, got {}",
                self.max_factor
            )));
        }
        if self.min_factor > self.max_factor {
            return Err(PinchError::InvalidConfig(format!(
                "min_factor {} exceeds max_factor {}",
                self.min_factor, self.max_factor
            )));
        }
        if !(self.wheel_delta_divisor.is_finite() && self.wheel_delta_divisor > 0.0) {
            return Err(PinchError::InvalidConfig(format!(
                "wheel_delta_divisor must be finite and positive, got {}",
                self.wheel_delta_divisor
            )));
        }
        Ok(())
    }
}

/// Whether consumed events get their default action suppressed.
///
/// `Shared` is read on every event, so the host can flip it while listeners are
/// attached. Listener passivity is decided once, at registration.
#[derive(Clone, Debug)]
pub enum PreventDefault {
    Fixed(bool),
    Shared(Rc<Cell<bool>>),
}

impl PreventDefault {
    /// Creates a shared flag and returns the handle the host keeps for toggling.
    pub fn shared(initial: bool) -> (Self, Rc<Cell<bool>>) {
        let flag = Rc::new(Cell::new(initial));
        (Self::Shared(flag.clone()), flag)
    }

    pub fn get(&self) -> bool {
        match self {
            Self::Fixed(v) => *v,
            Self::Shared(flag) => flag.get(),
        }
    }
}

impl Default for PreventDefault {
    fn default() -> Self {
        Self::Fixed(true)
    }
}

impl From<bool> for PreventDefault {
    fn from(value: bool) -> Self {
        Self::Fixed(value)
    }
}

impl From<Rc<Cell<bool>>> for PreventDefault {
    fn from(flag: Rc<Cell<bool>>) -> Self {
        Self::Shared(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_default_keeps_valid_and_replaces_invalid() {
        let valid = PinchConfig {
            max_factor: 2.0,
            capture: true,
            ..Default::default()
        };
        assert_eq!(valid.or_default(), valid);

        let nan = PinchConfig {
            min_factor: f64::NAN,
            capture: true,
            ..Default::default()
        };
        assert_eq!(nan.or_default(), PinchConfig::default());
    }

    #[test]
    fn defaults_match_constants() {
        let config = PinchConfig::default();
        assert_eq!(config.min_factor, 0.125);
        assert_eq!(config.max_factor, 4.0);
        assert_eq!(config.wheel_delta_divisor, 100.0);
        assert!(!config.meta_key_pinch);
        assert!(!config.end_on_contact_loss);
        assert!(!config.capture);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = PinchConfig::from_json(r#"{ "max_factor": 2.0, "capture": true }"#).unwrap();
        assert_eq!(config.max_factor, 2.0);
        assert_eq!(config.min_factor, MIN_FACTOR);
        assert!(config.capture);
    }

    #[test]
    fn json_survives_a_save_and_load() {
        let config = PinchConfig {
            meta_key_pinch: true,
            ..Default::default()
        };
        let raw = config.to_json().unwrap();
        assert_eq!(PinchConfig::from_json(&raw).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PinchConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PinchError::Config(_)));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = PinchConfig::from_json(r#"{ "min_factor": 5.0, "max_factor": 2.0 }"#)
            .unwrap_err();
        assert!(matches!(err, PinchError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_non_positive_values() {
        let zero_min = PinchConfig {
            min_factor: 0.0,
            ..Default::default()
        };
        assert!(zero_min.validate().is_err());

        let negative_divisor = PinchConfig {
            wheel_delta_divisor: -1.0,
            ..Default::default()
        };
        assert!(negative_divisor.validate().is_err());

        let infinite_max = PinchConfig {
            max_factor: f64::INFINITY,
            ..Default::default()
        };
        assert!(infinite_max.validate().is_err());
    }

    #[test]
    fn shared_flag_is_read_live() {
        let (prevent, flag) = PreventDefault::shared(true);
        assert!(prevent.get());
        flag.set(false);
        assert!(!prevent.get());
    }

    #[test]
    fn prevent_default_defaults_to_true() {
        assert!(PreventDefault::default().get());
        assert!(!PreventDefault::from(false).get());
    }
}
