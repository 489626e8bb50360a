use crate::rack::{RackResult, StarryResult};
use crate::turn::{TurnResult, TurnSegment};
use std::fmt::Write;

pub fn format_rack_line(rack: &RackResult) -> String {
    let mut out = format!("Rack {}: ", rack.number);
    for shot in &rack.shots {
        write!(out, "{} ", shot).unwrap();
    }
    write!(out, "| {} pts", rack.points()).unwrap();
    out
}

pub fn format_starry_line(starry: &StarryResult) -> String {
    format!("Starry: {} | {} pts", starry.shot, starry.points())
}

/// All lines of a turn, ending with the total and a blank line.
pub fn format_turn(turn: &TurnResult) -> String {
    let mut out = String::new();
    for segment in &turn.segments {
        let line = match segment {
            TurnSegment::Rack(r) => format_rack_line(r),
            TurnSegment::Starry(s) => format_starry_line(s),
        };
        writeln!(out, "{}", line).unwrap();
    }
    writeln!(out, "Total: {} pts", turn.total()).unwrap();
    writeln!(out).unwrap();
    out
}

pub fn format_player_header(player: usize) -> String {
    format!("Player {}", player + 1)
}

pub fn format_winner(player: usize) -> String {
    format!("Player {} is the winner!", player + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ScriptedShots;
    use crate::turn::play_turn;
    use hoops_core::{PlayerConfig, RackKind, RackNumber, ShootingCapability, Shot, ShotKind};

    #[test]
    fn test_rack_line() {
        let rack = RackResult {
            number: RackNumber::new(3).unwrap(),
            kind: RackKind::MoneyBall,
            shots: [
                Shot::Made(ShotKind::MoneyBall),
                Shot::Missed,
                Shot::Made(ShotKind::MoneyBall),
                Shot::Missed,
                Shot::Missed,
            ],
        };
        assert_eq!(format_rack_line(&rack), "Rack 3: M _ M _ _ | 4 pts");
    }

    #[test]
    fn test_starry_line() {
        let made = StarryResult {
            after_rack: RackNumber::new(2).unwrap(),
            shot: Shot::Made(ShotKind::Starry),
        };
        assert_eq!(format_starry_line(&made), "Starry: S | 3 pts");
        let missed = StarryResult {
            after_rack: RackNumber::new(4).unwrap(),
            shot: Shot::Missed,
        };
        assert_eq!(format_starry_line(&missed), "Starry: _ | 0 pts");
    }

    #[test]
    fn test_turn_block() {
        let config = PlayerConfig::new(
            RackNumber::new(1).unwrap(),
            ShootingCapability::new(50).unwrap(),
        );
        let mut script = ScriptedShots::all_made(27);
        let text = format_turn(&play_turn(&mut script, &config));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Rack 1: M M M M M | 10 pts",
                "Rack 2: X X X X X | 5 pts",
                "Starry: S | 3 pts",
                "Rack 3: X X X X X | 5 pts",
                "Rack 4: X X X X X | 5 pts",
                "Starry: S | 3 pts",
                "Rack 5: X X X X X | 5 pts",
                "Total: 36 pts",
                "",
            ]
        );
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(format_player_header(0), "Player 1");
        assert_eq!(format_winner(1), "Player 2 is the winner!");
    }
}
