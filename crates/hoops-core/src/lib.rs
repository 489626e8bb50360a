pub mod capability;
pub mod error;
pub mod player;
pub mod rack;
pub mod scoreboard;
pub mod shot;

pub use capability::ShootingCapability;
pub use error::ConfigError;
pub use player::{PlayerConfig, MIN_PLAYERS};
pub use rack::{RackKind, RackNumber, RACKS_PER_TURN, SHOTS_PER_RACK};
pub use scoreboard::Scoreboard;
pub use shot::{Shot, ShotKind, STARRY_POINTS};
