use serde::{Deserialize, Serialize};

/// Final scores of one match, indexed by player (0-based).
///
/// A score is appended when that player's turn ends and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Scoreboard {
    scores: Vec<u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scores(scores: Vec<u32>) -> Self {
        Self { scores }
    }

    /// Records the next player's final score.
    pub fn push(&mut self, score: u32) {
        self.scores.push(score);
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn players(&self) -> usize {
        self.scores.len()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.scores.iter().copied().max()
    }

    /// Index of the first player holding the top score. Ties go to the
    /// earliest player.
    pub fn winner(&self) -> Option<usize> {
        let mut winner: Option<usize> = None;
        for (i, &score) in self.scores.iter().enumerate() {
            match winner {
                Some(w) if score <= self.scores[w] => {}
                _ => winner = Some(i),
            }
        }
        winner
    }

    /// How many players share the top score.
    pub fn leaders(&self) -> usize {
        match self.top_score() {
            Some(top) => self.scores.iter().filter(|&&s| s == top).count(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_first_max() {
        let board = Scoreboard::from_scores(vec![10, 15, 15, 8]);
        assert_eq!(board.winner(), Some(1));
        assert_eq!(board.top_score(), Some(15));
        assert_eq!(board.leaders(), 2);
    }

    #[test]
    fn test_winner_all_zero() {
        let board = Scoreboard::from_scores(vec![0, 0, 0]);
        assert_eq!(board.winner(), Some(0));
        assert_eq!(board.leaders(), 3);
    }

    #[test]
    fn test_winner_last_player() {
        let board = Scoreboard::from_scores(vec![1, 2, 3]);
        assert_eq!(board.winner(), Some(2));
    }

    #[test]
    fn test_empty_board() {
        let board = Scoreboard::default();
        assert_eq!(board.winner(), None);
        assert_eq!(board.leaders(), 0);
    }

    #[test]
    fn test_push_in_turn_order() {
        let mut board = Scoreboard::new();
        assert_eq!(board.players(), 0);
        board.push(4);
        board.push(12);
        assert_eq!(board.scores(), &[4, 12]);
        assert_eq!(board.players(), 2);
        assert_eq!(board.winner(), Some(1));
    }
}
