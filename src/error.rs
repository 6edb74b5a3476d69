// Raffle Bot - Errors
use thiserror::Error;

/// Errors raised while parsing a chat command, before anything reaches the
/// raffle registry.
///
/// The display text of each variant is the reply sent back to the channel,
/// so malformed input is answered with the matching usage message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The bot was addressed with no subcommand
    #[error("Usage: !raffle command [sub-commands]\nDo \"!raffle help\" to list available commands")]
    MissingSubcommand,

    /// `new` needs a date and a reward description
    #[error("New Raffle usage: !raffle new mm/dd/yyyy reward name")]
    NewUsage,

    /// The date argument did not parse as a real MM/DD/YYYY date
    #[error("Date should be formatted MM/DD/YYYY")]
    InvalidDate,

    /// `delete` needs a numeric raffle id
    #[error("Delete Raffle usage: !raffle delete ID")]
    DeleteUsage,

    /// `details` needs a numeric raffle id
    #[error("Details Raffle usage: !raffle details ID")]
    DetailsUsage,

    /// `enter` needs a numeric raffle id
    #[error("Enter Raffle usage: !raffle enter ID")]
    EnterUsage,
}
