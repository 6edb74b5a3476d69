// Raffle Bot - Command Parsing
use chrono::NaiveDate;

use crate::error::CommandError;

/// Prefix that addresses the bot in a channel
pub const COMMAND_PREFIX: &str = "!raffle";

/// Date format accepted from chat: month/day/4-digit-year
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// A fully parsed `!raffle` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RaffleCommand {
    /// `!raffle list`
    ///
    /// One line per raffle, by id.
    List,

    /// `!raffle help`
    ///
    /// Lists the available subcommands. Unknown subcommands fall back to
    /// this as well.
    Help,

    /// `!raffle new mm/dd/yyyy reward name`
    ///
    /// Creates a raffle to be drawn on or after the given date.
    New {
        /// Earliest date on which the raffle may be drawn
        date: NaiveDate,
        /// Free-form reward description, the remainder of the message
        reward: String,
    },

    /// `!raffle delete ID`
    Delete { id: u64 },

    /// `!raffle details ID`
    Details { id: u64 },

    /// `!raffle enter ID`
    ///
    /// Enters the message author into the raffle.
    Enter { id: u64 },

    /// `!raffle run`
    ///
    /// Draws every raffle whose date has arrived.
    Run,
}

impl RaffleCommand {
    /// Parses a chat message. Returns `None` when the message does not
    /// address the bot at all; such messages get no reply.
    pub fn parse(content: &str) -> Option<Result<Self, CommandError>> {
        if !content.starts_with(COMMAND_PREFIX) {
            return None;
        }
        Some(Self::parse_addressed(content))
    }

    fn parse_addressed(content: &str) -> Result<Self, CommandError> {
        let mut items = content.split_whitespace();
        let _prefix = items.next();
        let Some(subcommand) = items.next() else {
            return Err(CommandError::MissingSubcommand);
        };

        match subcommand {
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "run" => Ok(Self::Run),
            "new" => Self::parse_new(content),
            "delete" => {
                Self::parse_id(items.next(), CommandError::DeleteUsage).map(|id| Self::Delete { id })
            }
            "details" => Self::parse_id(items.next(), CommandError::DetailsUsage)
                .map(|id| Self::Details { id }),
            "enter" => {
                Self::parse_id(items.next(), CommandError::EnterUsage).map(|id| Self::Enter { id })
            }
            _ => Ok(Self::Help),
        }
    }

    /// `new` takes a date token followed by the reward description, which is
    /// the raw remainder of the message so interior whitespace survives.
    fn parse_new(content: &str) -> Result<Self, CommandError> {
        let mut items = content.split_whitespace().skip(2);
        let Some(date_text) = items.next() else {
            return Err(CommandError::NewUsage);
        };
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_| CommandError::InvalidDate)?;

        let Some(date_start) = content.find(date_text) else {
            return Err(CommandError::NewUsage);
        };
        let reward = content[date_start + date_text.len()..].trim();
        if reward.is_empty() {
            return Err(CommandError::NewUsage);
        }

        Ok(Self::New {
            date,
            reward: reward.to_string(),
        })
    }

    fn parse_id(arg: Option<&str>, usage: CommandError) -> Result<u64, CommandError> {
        arg.and_then(|text| text.parse::<u64>().ok()).ok_or(usage)
    }
}
