//! Tub command — what the heater relay is asked to do.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The two states the relay can be driven into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TubCommand {
    On,
    Off,
}

impl TubCommand {
    /// Value the relay controller expects in its `value` query parameter.
    #[must_use]
    pub fn relay_value(self) -> &'static str {
        match self {
            Self::On => "1",
            Self::Off => "0",
        }
    }

    /// Log line recorded once the relay acknowledged the command.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::On => "turned on",
            Self::Off => "turned off",
        }
    }
}

impl fmt::Display for TubCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

impl FromStr for TubCommand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(ValidationError::InvalidTubValue(other.to_owned())),
        }
    }
}
