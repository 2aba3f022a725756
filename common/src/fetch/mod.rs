//! Fetch lifecycle tracking shared by the profile and jobs reads.
//!
//! A `Fetched<T>` pairs the lifecycle status with the last successful result
//! and is only mutated through `begin` and `settle`, so status and data always
//! change together. Every `begin` hands out a fresh `Ticket`; `settle` ignores
//! results carrying an older ticket, which means a slow response to a
//! superseded request can never overwrite the outcome of a newer one.

mod view;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use view::{JobsView, ProfileView};

/// Lifecycle of a single fetcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    /// Nothing has been requested yet.
    #[default]
    Initial,
    /// A request is in flight.
    InProgress,
    /// The latest request succeeded and its data is current.
    Success,
    /// The latest request failed for any reason.
    Failure,
}

/// Why a fetch failed. Views collapse every variant to `FetchStatus::Failure`;
/// the detail only reaches the console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

/// Generation number of one fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Status plus the data of the last successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    status: FetchStatus,
    data: T,
    generation: u64,
}

impl<T: Default> Default for Fetched<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Initial,
            data: T::default(),
            generation: 0,
        }
    }
}

impl<T> Fetched<T> {
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Data of the last successful fetch, or the default before any success.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Marks a new fetch as in flight and invalidates every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.status = FetchStatus::InProgress;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Records the outcome of the fetch identified by `ticket`.
    ///
    /// Success replaces the data wholesale; failure keeps the previous data
    /// but flips the status. Returns `false` and changes nothing when the
    /// ticket has been superseded.
    pub fn settle<E>(&mut self, ticket: Ticket, outcome: Result<T, E>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding result of fetch {} (latest is #{})",
                ticket,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(data) => {
                self.data = data;
                self.status = FetchStatus::Success;
            }
            Err(_) => self.status = FetchStatus::Failure,
        }
        true
    }
}
