use crate::error::ConfigError;
use crate::shot::ShotKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SHOTS_PER_RACK: usize = 5;
pub const RACKS_PER_TURN: u8 = 5;

/// Position of a rack in a turn, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RackNumber(u8);

impl RackNumber {
    pub const ALL: [RackNumber; RACKS_PER_TURN as usize] = [
        RackNumber(1),
        RackNumber(2),
        RackNumber(3),
        RackNumber(4),
        RackNumber(5),
    ];

    pub fn new(n: i64) -> Result<Self, ConfigError> {
        if (1..=RACKS_PER_TURN as i64).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(ConfigError::RackOutOfRange(n))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Starry balls are shot after the second and fourth racks.
    pub fn is_followed_by_starry(self) -> bool {
        matches!(self.0, 2 | 4)
    }
}

impl TryFrom<i64> for RackNumber {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RackNumber> for u8 {
    fn from(value: RackNumber) -> Self {
        value.0
    }
}

impl FromStr for RackNumber {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::Malformed(s.to_string()))?;
        Self::new(n)
    }
}

impl fmt::Display for RackNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RackKind {
    Regular,
    MoneyBall,
}

impl RackKind {
    pub fn shot_kind(self) -> ShotKind {
        match self {
            RackKind::Regular => ShotKind::Regular,
            RackKind::MoneyBall => ShotKind::MoneyBall,
        }
    }

    /// Points for each made shot in a rack of this kind.
    pub fn point_value(self) -> u32 {
        self.shot_kind().points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rack_number_bounds() {
        assert_eq!(RackNumber::new(0), Err(ConfigError::RackOutOfRange(0)));
        assert_eq!(RackNumber::new(6), Err(ConfigError::RackOutOfRange(6)));
        for n in 1..=5 {
            assert_eq!(RackNumber::new(n).unwrap().get() as i64, n);
        }
    }

    #[test]
    fn test_all_is_in_order() {
        let numbers: Vec<u8> = RackNumber::ALL.iter().map(|r| r.get()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_starry_schedule() {
        let starry: Vec<u8> = RackNumber::ALL
            .iter()
            .filter(|r| r.is_followed_by_starry())
            .map(|r| r.get())
            .collect();
        assert_eq!(starry, vec![2, 4]);
    }

    #[test]
    fn test_point_values() {
        assert_eq!(RackKind::Regular.point_value(), 1);
        assert_eq!(RackKind::MoneyBall.point_value(), 2);
    }
}
