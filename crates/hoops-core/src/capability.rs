use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A player's make-probability, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ShootingCapability(u8);

impl ShootingCapability {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 99;

    pub fn new(percent: i64) -> Result<Self, ConfigError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&percent) {
            Ok(Self(percent as u8))
        } else {
            Err(ConfigError::CapabilityOutOfRange(percent))
        }
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ShootingCapability {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShootingCapability> for u8 {
    fn from(value: ShootingCapability) -> Self {
        value.0
    }
}

impl FromStr for ShootingCapability {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent: i64 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::Malformed(s.to_string()))?;
        Self::new(percent)
    }
}

impl fmt::Display for ShootingCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
