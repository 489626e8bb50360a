use crate::oracle::ShotSource;
use hoops_core::{RackKind, RackNumber, ShootingCapability, Shot, ShotKind, SHOTS_PER_RACK};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RackResult {
    pub number: RackNumber,
    pub kind: RackKind,
    pub shots: [Shot; SHOTS_PER_RACK],
}

impl RackResult {
    pub fn points(&self) -> u32 {
        self.shots.iter().map(|s| s.points()).sum()
    }

    pub fn made(&self) -> usize {
        self.shots.iter().filter(|s| s.is_made()).count()
    }
}

/// Shoots one rack of five balls. Every make is worth the rack's point value.
pub fn simulate_rack(
    source: &mut impl ShotSource,
    number: RackNumber,
    kind: RackKind,
    capability: ShootingCapability,
) -> RackResult {
    let shot_kind = kind.shot_kind();
    let mut shots = [Shot::Missed; SHOTS_PER_RACK];
    for shot in shots.iter_mut() {
        *shot = Shot::new(shot_kind, source.attempt(capability));
    }
    let result = RackResult {
        number,
        kind,
        shots,
    };
    log::debug!(
        "rack {} ({:?}): {}/{} made, {} pts",
        number,
        kind,
        result.made(),
        SHOTS_PER_RACK,
        result.points()
    );
    result
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarryResult {
    pub after_rack: RackNumber,
    pub shot: Shot,
}

impl StarryResult {
    pub fn points(&self) -> u32 {
        self.shot.points()
    }
}

/// Shoots the single starry ball taken between racks.
pub fn simulate_starry(
    source: &mut impl ShotSource,
    after_rack: RackNumber,
    capability: ShootingCapability,
) -> StarryResult {
    let shot = Shot::new(ShotKind::Starry, source.attempt(capability));
    log::debug!("starry after rack {}: {:?}", after_rack, shot);
    StarryResult { after_rack, shot }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{ScriptedShots, ShotOracle};

    fn rack(n: i64) -> RackNumber {
        RackNumber::new(n).unwrap()
    }

    fn cap(p: i64) -> ShootingCapability {
        ShootingCapability::new(p).unwrap()
    }

    #[test]
    fn test_regular_rack_scores_one_per_make() {
        let mut script = ScriptedShots::new([true, false, true, true, false]);
        let result = simulate_rack(&mut script, rack(1), RackKind::Regular, cap(50));
        assert_eq!(result.points(), 3);
        assert_eq!(result.made(), 3);
        assert_eq!(script.taken(), 5);
    }

    #[test]
    fn test_money_rack_scores_two_per_make() {
        let mut script = ScriptedShots::new([true, true, false, true, false]);
        let result = simulate_rack(&mut script, rack(4), RackKind::MoneyBall, cap(50));
        assert_eq!(result.points(), 6);
        assert_eq!(result.shots[0], Shot::Made(ShotKind::MoneyBall));
        assert_eq!(result.shots[2], Shot::Missed);
    }

    #[test]
    fn test_money_rack_at_top_capability() {
        let mut oracle = ShotOracle::seeded(11);
        for _ in 0..200 {
            let points = simulate_rack(&mut oracle, rack(2), RackKind::MoneyBall, cap(99)).points();
            assert!([0, 2, 4, 6, 8, 10].contains(&points), "got {points}");
        }
    }

    #[test]
    fn test_starry() {
        let mut script = ScriptedShots::new([true, false]);
        let made = simulate_starry(&mut script, rack(2), cap(50));
        let missed = simulate_starry(&mut script, rack(4), cap(50));
        assert_eq!(made.points(), 3);
        assert_eq!(made.shot, Shot::Made(ShotKind::Starry));
        assert_eq!(missed.points(), 0);
        assert_eq!(script.taken(), 2);
    }
}
