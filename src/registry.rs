// Raffle Bot - Registry
use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use crate::state::{AddResult, DrawOutcome, Raffle, Ticket};

/// Owning collection of raffles, keyed by id.
///
/// Ids are handed out sequentially starting at 1 and are never reused, even
/// after a deletion. The map is ordered by id, so iteration always follows
/// creation order.
#[derive(Clone, Debug)]
pub struct RaffleRegistry {
    // Counter for sequential raffle ids, starts at 1
    next_raffle_id: u64,
    raffles: BTreeMap<u64, Raffle>,
}

impl RaffleRegistry {
    pub fn new() -> Self {
        RaffleRegistry {
            next_raffle_id: 1,
            raffles: BTreeMap::new(),
        }
    }

    /// Creates a raffle in its initial state and returns the new id.
    pub fn create(&mut self, reward: impl Into<String>, date: NaiveDate) -> u64 {
        let id = self.next_raffle_id;
        self.next_raffle_id += 1;
        let raffle = Raffle::new(id, reward, date);
        info!(id, date = %raffle.scheduled_date(), "raffle created");
        self.raffles.insert(id, raffle);
        id
    }

    /// Removes the raffle with the given id. Returns whether a removal
    /// occurred.
    pub fn delete(&mut self, id: u64) -> bool {
        let removed = self.raffles.remove(&id).is_some();
        if removed {
            info!(id, "raffle deleted");
        }
        removed
    }

    /// Read-only view of a single raffle
    pub fn get(&self, id: u64) -> Option<&Raffle> {
        self.raffles.get(&id)
    }

    /// All raffles in ascending id order. An empty listing is the explicit
    /// "no raffles" state; callers render it as such instead of forwarding
    /// an empty string.
    pub fn list(&self) -> Vec<&Raffle> {
        self.raffles.values().collect()
    }

    pub fn len(&self) -> usize {
        self.raffles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raffles.is_empty()
    }

    /// Routes a ticket to the raffle with the given id.
    pub fn add_ticket(&mut self, id: u64, ticket: Ticket) -> AddResult {
        match self.raffles.get_mut(&id) {
            Some(raffle) => {
                let result = raffle.add_ticket(ticket);
                if result == AddResult::Added {
                    info!(id, entrants = raffle.ticket_count(), "ticket added");
                }
                result
            }
            None => AddResult::NotFound,
        }
    }

    /// Attempts a draw on a single raffle. Returns `None` when no raffle
    /// has the given id.
    pub fn draw(&mut self, id: u64, today: NaiveDate) -> Option<DrawOutcome> {
        let raffle = self.raffles.get_mut(&id)?;
        let outcome = raffle.conduct(today);
        if let DrawOutcome::Completed(winner) = &outcome {
            info!(id, winner = %winner.username, "raffle completed");
        }
        Some(outcome)
    }

    /// Draws every raffle whose scheduled date is on or before `today` and
    /// which has not been completed yet, in ascending id order. Returns the
    /// outcome of each attempted draw; completed and future-dated raffles
    /// are left untouched and do not appear in the report.
    pub fn run_eligible(&mut self, today: NaiveDate) -> Vec<(u64, DrawOutcome)> {
        let mut outcomes = Vec::new();
        for (&id, raffle) in self.raffles.iter_mut() {
            if raffle.is_completed() || today < raffle.scheduled_date() {
                continue;
            }
            let outcome = raffle.conduct(today);
            if let DrawOutcome::Completed(winner) = &outcome {
                info!(id, winner = %winner.username, "raffle completed");
            }
            outcomes.push((id, outcome));
        }
        outcomes
    }
}

impl Default for RaffleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
