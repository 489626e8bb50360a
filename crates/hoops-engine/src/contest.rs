use crate::error::SessionError;
use crate::oracle::ShotSource;
use crate::turn::{play_turn, TurnResult};
use hoops_core::{PlayerConfig, Scoreboard, MIN_PLAYERS};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchOutcome {
    pub scoreboard: Scoreboard,
    pub turns: Vec<TurnResult>,
}

impl MatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a finished turn as the next player's result.
    pub fn record_turn(&mut self, turn: TurnResult) {
        self.scoreboard.push(turn.total());
        self.turns.push(turn);
    }

    /// 0-based index of the winning player.
    pub fn winner(&self) -> usize {
        // A match always has at least MIN_PLAYERS scores.
        self.scoreboard.winner().unwrap_or_default()
    }
}

/// Plays one match for players whose configurations are already known,
/// taking turns in order.
pub fn play_match(
    configs: &[PlayerConfig],
    source: &mut impl ShotSource,
) -> Result<MatchOutcome, SessionError> {
    if configs.len() < MIN_PLAYERS {
        return Err(SessionError::NotEnoughPlayers {
            given: configs.len() as i64,
        });
    }

    let mut outcome = MatchOutcome::new();
    for config in configs {
        outcome.record_turn(play_turn(source, config));
    }

    log::info!(
        "match scores {:?}, player {} wins",
        outcome.scoreboard.scores(),
        outcome.winner() + 1
    );
    Ok(outcome)
}
