mod console;
mod contest;
mod error;
mod oracle;
mod rack;
pub mod render;
pub mod session;
mod turn;

pub use console::Console;
pub use contest::{play_match, MatchOutcome};
pub use error::SessionError;
pub use oracle::{ScriptedShots, ShotOracle, ShotSource};
pub use rack::{simulate_rack, simulate_starry, RackResult, StarryResult};
pub use session::{run_match, run_session, SessionSummary};
pub use turn::{play_turn, TurnResult, TurnSegment};
