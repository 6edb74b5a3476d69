// Raffle Bot - Command Processor
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::command::{RaffleCommand, DATE_FORMAT};
use crate::registry::RaffleRegistry;
use crate::state::{AddResult, DrawOutcome, Raffle, Ticket};

/// Dispatches parsed commands against the raffle registry and renders the
/// replies.
///
/// This is the single entry point the chat transport calls into. The
/// transport resolves the message author to a stable user id plus display
/// name, filters out the bot's own messages, and sends whatever reply text
/// comes back. All raffle state lives behind this type; calls are expected
/// one at a time in arrival order.
pub struct Processor {
    registry: RaffleRegistry,
}

impl Processor {
    pub fn new() -> Self {
        Processor {
            registry: RaffleRegistry::new(),
        }
    }

    /// Read-only view of the owned registry
    pub fn registry(&self) -> &RaffleRegistry {
        &self.registry
    }

    /// Handles one chat message. Returns `None` when the message is not a
    /// raffle command, otherwise the reply to send back to the channel.
    pub fn handle_message(&mut self, author: Ticket, content: &str) -> Option<String> {
        self.handle_message_on(author, content, Local::now().date_naive())
    }

    /// Same as [`Processor::handle_message`], with the evaluation date
    /// supplied by the caller instead of read from the system clock.
    pub fn handle_message_on(
        &mut self,
        author: Ticket,
        content: &str,
        today: NaiveDate,
    ) -> Option<String> {
        let command = match RaffleCommand::parse(content)? {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "rejected command");
                return Some(err.to_string());
            }
        };
        Some(self.dispatch(author, command, today))
    }

    fn dispatch(&mut self, author: Ticket, command: RaffleCommand, today: NaiveDate) -> String {
        match command {
            RaffleCommand::List => {
                info!("command: list");
                self.list_raffles()
            }
            RaffleCommand::Help => {
                info!("command: help");
                help_message()
            }
            RaffleCommand::New { date, reward } => {
                info!("command: new");
                self.new_raffle(reward, date)
            }
            RaffleCommand::Delete { id } => {
                info!(id, "command: delete");
                self.delete_raffle(id)
            }
            RaffleCommand::Details { id } => {
                info!(id, "command: details");
                self.raffle_details(id)
            }
            RaffleCommand::Enter { id } => {
                info!(id, "command: enter");
                self.enter_raffle(id, author)
            }
            RaffleCommand::Run => {
                info!("command: run");
                self.run_raffles(today)
            }
        }
    }

    fn new_raffle(&mut self, reward: String, date: NaiveDate) -> String {
        let id = self.registry.create(reward.as_str(), date);
        format!("New Raffle => ({id}: {reward})")
    }

    fn list_raffles(&self) -> String {
        let raffles = self.registry.list();
        if raffles.is_empty() {
            return "No raffles found".to_string();
        }
        raffles
            .iter()
            .map(|raffle| listing_line(raffle))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_raffle(&mut self, id: u64) -> String {
        if self.registry.delete(id) {
            format!("Deleted raffle with ID = {id}")
        } else {
            not_found_message(id)
        }
    }

    fn raffle_details(&self, id: u64) -> String {
        match self.registry.get(id) {
            Some(raffle) => details_line(raffle),
            None => not_found_message(id),
        }
    }

    fn enter_raffle(&mut self, id: u64, author: Ticket) -> String {
        let name = author.username.clone();
        match self.registry.add_ticket(id, author) {
            AddResult::Added => format!("{name} entered raffle {id}"),
            AddResult::AlreadyEntered => {
                format!("{name} already holds a ticket for raffle {id}")
            }
            AddResult::RaffleClosed => format!("Raffle {id} has already been completed"),
            AddResult::NotFound => not_found_message(id),
        }
    }

    fn run_raffles(&mut self, today: NaiveDate) -> String {
        let outcomes = self.registry.run_eligible(today);
        if outcomes.is_empty() {
            return "No raffles were ready to run".to_string();
        }
        outcomes
            .iter()
            .map(|(id, outcome)| run_report_line(*id, outcome))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of `!raffle list` output
fn listing_line(raffle: &Raffle) -> String {
    match raffle.winner() {
        Some(winner) => format!(
            "{}: {} rewarded to {} on {}",
            raffle.id(),
            raffle.reward(),
            winner.username,
            raffle.scheduled_date().format(DATE_FORMAT),
        ),
        None => format!("{}: {}", raffle.id(), raffle.reward()),
    }
}

/// Reply for `!raffle details ID`
fn details_line(raffle: &Raffle) -> String {
    if raffle.is_completed() {
        format!(
            "ID: {}; {}; Completed on {}",
            raffle.id(),
            raffle.reward(),
            raffle.scheduled_date().format(DATE_FORMAT),
        )
    } else {
        format!(
            "ID: {}; {}; To be completed on {}",
            raffle.id(),
            raffle.reward(),
            raffle.scheduled_date().format(DATE_FORMAT),
        )
    }
}

/// One line of the `!raffle run` report
fn run_report_line(id: u64, outcome: &DrawOutcome) -> String {
    match outcome {
        DrawOutcome::Completed(winner) => format!("Raffle {id} won by {}", winner.username),
        DrawOutcome::NoEntrants => format!("Raffle {id} has no tickets to draw from"),
        // run_eligible only attempts open, due raffles; these never appear
        // in its report
        DrawOutcome::NotYetEligible | DrawOutcome::AlreadyCompleted => {
            format!("Raffle {id} was skipped")
        }
    }
}

fn help_message() -> String {
    "Available commands:\n\thelp\n\tlist\n\tnew\n\tdelete\n\tdetails\n\tenter\n\trun".to_string()
}

fn not_found_message(id: u64) -> String {
    format!("No raffle found with ID = {id}")
}
