use crate::capability::ShootingCapability;
use crate::error::ConfigError;
use crate::rack::{RackKind, RackNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fewest players a match can be played with.
pub const MIN_PLAYERS: usize = 2;

/// What a player chooses before their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub money_rack: RackNumber,
    pub capability: ShootingCapability,
}

impl PlayerConfig {
    pub fn new(money_rack: RackNumber, capability: ShootingCapability) -> Self {
        Self {
            money_rack,
            capability,
        }
    }

    pub fn rack_kind(&self, rack: RackNumber) -> RackKind {
        if rack == self.money_rack {
            RackKind::MoneyBall
        } else {
            RackKind::Regular
        }
    }
}

/// Parses `CAPABILITY/RACK`, e.g. `75/3`.
impl FromStr for PlayerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (capability, rack) = s
            .split_once('/')
            .ok_or_else(|| ConfigError::Malformed(s.to_string()))?;
        let capability = capability
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::Malformed(s.to_string()))?;
        let rack = rack
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::Malformed(s.to_string()))?;
        Ok(Self::new(
            RackNumber::new(rack)?,
            ShootingCapability::new(capability)?,
        ))
    }
}

impl fmt::Display for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.capability.percent(), self.money_rack)
    }
}
