use serde::{Deserialize, Serialize};
use std::fmt;

pub const STARRY_POINTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotKind {
    Regular,
    MoneyBall,
    Starry,
}

impl ShotKind {
    pub fn points(self) -> u32 {
        match self {
            ShotKind::Regular => 1,
            ShotKind::MoneyBall => 2,
            ShotKind::Starry => STARRY_POINTS,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            ShotKind::Regular => 'X',
            ShotKind::MoneyBall => 'M',
            ShotKind::Starry => 'S',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shot {
    Made(ShotKind),
    Missed,
}

impl Shot {
    pub const MISSED_GLYPH: char = '_';

    pub fn new(kind: ShotKind, made: bool) -> Self {
        if made {
            Shot::Made(kind)
        } else {
            Shot::Missed
        }
    }

    pub fn is_made(self) -> bool {
        matches!(self, Shot::Made(_))
    }

    pub fn points(self) -> u32 {
        match self {
            Shot::Made(kind) => kind.points(),
            Shot::Missed => 0,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Shot::Made(kind) => kind.glyph(),
            Shot::Missed => Self::MISSED_GLYPH,
        }
    }
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
