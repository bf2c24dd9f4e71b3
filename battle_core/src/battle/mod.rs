//! Battle - the wave-by-wave state machine and the state it drives

mod event;
mod orchestrator;
mod player;

pub use event::{BattleEvent, BattleObserver, EventLog, GameResult, Rejection};
pub use orchestrator::{Battle, BattlePhase, BattleSnapshot, WaveOutcome};
pub use player::{Player, PlayerSnapshot};

pub(crate) use player::bury;
