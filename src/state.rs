// Raffle Bot - State
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Status of a raffle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleStatus {
    /// Raffle is open for entries
    Open,
    /// Raffle is complete and a winner has been chosen
    Completed,
}

/// One entry in a raffle, tied to the chat user who entered.
///
/// Two tickets belong to the same entrant exactly when their user ids match.
/// The username is a display label captured at entry time and carries no
/// identity.
#[derive(Clone, Debug)]
pub struct Ticket {
    /// Stable unique id of the entrant
    pub user_id: u64,
    /// Display name of the entrant
    pub username: String,
}

impl Ticket {
    pub fn new(user_id: u64, username: impl Into<String>) -> Self {
        Ticket {
            user_id,
            username: username.into(),
        }
    }
}

/// Equality is entrant identity: user id only.
impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for Ticket {}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s ticket", self.username)
    }
}

/// Result of attempting to admit a ticket into a raffle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddResult {
    /// Ticket accepted
    Added,
    /// The entrant already holds a ticket, nothing changed
    AlreadyEntered,
    /// The raffle has already been drawn, entries are closed
    RaffleClosed,
    /// No raffle with the requested id
    NotFound,
}

/// Outcome of a single draw attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A winner was chosen and the raffle is now completed
    Completed(Ticket),
    /// The scheduled date has not arrived yet, nothing changed
    NotYetEligible,
    /// There are no tickets to draw from, nothing changed
    NoEntrants,
    /// The raffle was drawn earlier, nothing changed
    AlreadyCompleted,
}

/// A single scheduled prize drawing.
///
/// A raffle starts `Open` with no tickets, collects tickets while open, and
/// moves to `Completed` exactly once when a winner is drawn. The winner is
/// set if and only if the raffle is completed, and once completed nothing
/// about the raffle changes again.
#[derive(Clone, Debug)]
pub struct Raffle {
    id: u64,
    reward: String,
    scheduled_date: NaiveDate,
    tickets: Vec<Ticket>,
    status: RaffleStatus,
    winner: Option<Ticket>,
}

impl Raffle {
    /// Ids are assigned by the registry; raffles are not built directly.
    pub(crate) fn new(id: u64, reward: impl Into<String>, scheduled_date: NaiveDate) -> Self {
        Raffle {
            id,
            reward: reward.into(),
            scheduled_date,
            tickets: Vec::new(),
            status: RaffleStatus::Open,
            winner: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Description of the prize
    pub fn reward(&self) -> &str {
        &self.reward
    }

    /// Earliest date on which the raffle may be drawn
    pub fn scheduled_date(&self) -> NaiveDate {
        self.scheduled_date
    }

    /// Tickets in insertion order
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    pub fn status(&self) -> RaffleStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == RaffleStatus::Completed
    }

    /// The winning ticket, present once the raffle is completed
    pub fn winner(&self) -> Option<&Ticket> {
        self.winner.as_ref()
    }

    /// Admits a ticket unless the entrant already holds one or the raffle
    /// has already been drawn.
    pub(crate) fn add_ticket(&mut self, ticket: Ticket) -> AddResult {
        if self.is_completed() {
            return AddResult::RaffleClosed;
        }
        if self
            .tickets
            .iter()
            .any(|held| held.user_id == ticket.user_id)
        {
            return AddResult::AlreadyEntered;
        }
        self.tickets.push(ticket);
        AddResult::Added
    }

    /// Attempts to draw the winner for the given evaluation date.
    ///
    /// The draw picks a random index over the current tickets, shuffles the
    /// ticket list, and takes whichever ticket landed on the picked index.
    /// Every ticket ends at a uniformly random position, so each entrant
    /// wins with equal probability.
    pub(crate) fn conduct(&mut self, today: NaiveDate) -> DrawOutcome {
        if self.is_completed() {
            return DrawOutcome::AlreadyCompleted;
        }
        if today < self.scheduled_date {
            return DrawOutcome::NotYetEligible;
        }
        if self.tickets.is_empty() {
            return DrawOutcome::NoEntrants;
        }

        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..self.tickets.len());
        self.tickets.shuffle(&mut rng);
        let winner = self.tickets[index].clone();

        self.status = RaffleStatus::Completed;
        self.winner = Some(winner.clone());
        DrawOutcome::Completed(winner)
    }
}
