use hoops_core::PlayerConfig;
use hoops_engine::{play_match, MatchOutcome, SessionError, ShotSource};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStats {
    pub config: PlayerConfig,
    pub wins: usize,
    pub total_points: u64,
    pub lowest: Option<u32>,
    pub highest: Option<u32>,
}

impl PlayerStats {
    fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            wins: 0,
            total_points: 0,
            lowest: None,
            highest: None,
        }
    }

    fn record(&mut self, score: u32) {
        self.total_points += u64::from(score);
        self.lowest = Some(self.lowest.map_or(score, |l| l.min(score)));
        self.highest = Some(self.highest.map_or(score, |h| h.max(score)));
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchStats {
    pub seed: u64,
    pub matches: usize,
    /// Matches where more than one player held the top score.
    pub shared_top: usize,
    pub players: Vec<PlayerStats>,
}

impl BatchStats {
    pub fn new(seed: u64, configs: &[PlayerConfig]) -> Self {
        Self {
            seed,
            matches: 0,
            shared_top: 0,
            players: configs.iter().copied().map(PlayerStats::new).collect(),
        }
    }

    pub fn record(&mut self, outcome: &MatchOutcome) {
        self.matches += 1;
        if outcome.scoreboard.leaders() > 1 {
            self.shared_top += 1;
        }
        for (player, &score) in outcome.scoreboard.scores().iter().enumerate() {
            self.players[player].record(score);
        }
        self.players[outcome.winner()].wins += 1;
    }

    pub fn mean_score(&self, player: usize) -> f64 {
        ratio(self.players[player].total_points, self.matches as u64)
    }

    pub fn win_rate(&self, player: usize) -> f64 {
        100.0 * ratio(self.players[player].wins as u64, self.matches as u64)
    }
}

fn ratio(n: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        n as f64 / total as f64
    }
}

/// Plays `count` matches between the same players on one shot source.
pub fn run_batch(
    configs: &[PlayerConfig],
    count: usize,
    seed: u64,
    source: &mut impl ShotSource,
) -> Result<BatchStats, SessionError> {
    let mut stats = BatchStats::new(seed, configs);
    for _ in 0..count {
        let outcome = play_match(configs, source)?;
        stats.record(&outcome);
    }
    Ok(stats)
}

pub fn format_table(stats: &BatchStats) -> String {
    let mut out = String::new();
    writeln!(out, "Seed: {}", stats.seed).unwrap();
    writeln!(
        out,
        "Matches: {} | Shared top score: {}",
        stats.matches, stats.shared_top
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "  {:<8} {:>7} {:>6} {:>7} {:>6} {:>5} {:>5}",
        "Player", "Config", "Wins", "Win%", "Mean", "Low", "High"
    )
    .unwrap();
    for (i, p) in stats.players.iter().enumerate() {
        let low = p.lowest.map_or("-".to_string(), |v| v.to_string());
        let high = p.highest.map_or("-".to_string(), |v| v.to_string());
        writeln!(
            out,
            "  {:<8} {:>7} {:>6} {:>6.1}% {:>6.2} {:>5} {:>5}",
            i + 1,
            p.config.to_string(),
            p.wins,
            stats.win_rate(i),
            stats.mean_score(i),
            low,
            high
        )
        .unwrap();
    }
    out
}
