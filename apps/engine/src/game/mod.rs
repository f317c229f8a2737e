//! Game orchestration: instance data, the state machine, its outcome and events.

pub mod events;
pub mod instance;
pub mod master;
pub mod outcome;

pub use events::{EventLog, EventSink, GameEvent, Tee, TracingSink};
pub use instance::{GameInstance, RoundDeal};
pub use master::GameMaster;
pub use outcome::{ErrorStats, GameOutcome, GameStatus};
