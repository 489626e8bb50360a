use crate::oracle::ShotSource;
use crate::rack::{simulate_rack, simulate_starry, RackResult, StarryResult};
use hoops_core::{PlayerConfig, RackNumber};
use serde::Serialize;

/// One step of a turn, in the order it was shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnSegment {
    Rack(RackResult),
    Starry(StarryResult),
}

impl TurnSegment {
    pub fn points(&self) -> u32 {
        match self {
            TurnSegment::Rack(r) => r.points(),
            TurnSegment::Starry(s) => s.points(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnResult {
    pub config: PlayerConfig,
    pub segments: Vec<TurnSegment>,
}

impl TurnResult {
    pub fn total(&self) -> u32 {
        self.segments.iter().map(|s| s.points()).sum()
    }

    pub fn racks(&self) -> impl Iterator<Item = &RackResult> {
        self.segments.iter().filter_map(|s| match s {
            TurnSegment::Rack(r) => Some(r),
            TurnSegment::Starry(_) => None,
        })
    }

    pub fn starry_shots(&self) -> impl Iterator<Item = &StarryResult> {
        self.segments.iter().filter_map(|s| match s {
            TurnSegment::Starry(s) => Some(s),
            TurnSegment::Rack(_) => None,
        })
    }
}

/// Plays five racks, with a starry ball after racks 2 and 4.
pub fn play_turn(source: &mut impl ShotSource, config: &PlayerConfig) -> TurnResult {
    let mut segments = Vec::with_capacity(RackNumber::ALL.len() + 2);
    for rack in RackNumber::ALL {
        segments.push(TurnSegment::Rack(simulate_rack(
            source,
            rack,
            config.rack_kind(rack),
            config.capability,
        )));
        if rack.is_followed_by_starry() {
            segments.push(TurnSegment::Starry(simulate_starry(
                source,
                rack,
                config.capability,
            )));
        }
    }
    TurnResult {
        config: *config,
        segments,
    }
}
