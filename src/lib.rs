// Raffle Bot
// Chat-driven manager for time-scheduled prize drawings

// Core modules
pub mod command;
pub mod error;
pub mod processor;
pub mod registry;
pub mod state;

pub use command::RaffleCommand;
pub use error::CommandError;
pub use processor::Processor;
pub use registry::RaffleRegistry;
pub use state::{AddResult, DrawOutcome, Raffle, RaffleStatus, Ticket};
