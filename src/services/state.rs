use chrono::NaiveDate;
use tracing::debug;

use crate::models::DisplayOrder;

/// Transitions applied to the board: fetch completions reported by spawned
/// fetch tasks, plus user-driven changes. Fetch events carry the sequence
/// number handed out by `BoardState::begin_fetch`.
#[derive(Debug)]
pub enum BoardEvent {
    FetchSucceeded {
        seq: u64,
        orders: Vec<DisplayOrder>,
    },
    FetchFailed {
        seq: u64,
        message: String,
    },
    DateChanged {
        date: NaiveDate,
    },
}

/// The board's whole mutable surface: the loading/error/orders triple and
/// the selected date. Owned by the run loop; every change goes through
/// `begin_fetch` or `apply`, so the three render states cannot drift apart.
#[derive(Debug)]
pub struct BoardState {
    pub orders: Vec<DisplayOrder>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_date: NaiveDate,
    latest_seq: u64,
}

impl BoardState {
    pub fn new(selected_date: NaiveDate) -> Self {
        BoardState {
            orders: Vec::new(),
            loading: false,
            error: None,
            selected_date,
            latest_seq: 0,
        }
    }

    /// Stamps a new fetch. A completion is only honored if it still carries
    /// the latest stamp when it lands, so racing retries resolve to the last
    /// request issued rather than the last one to finish.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.loading = true;
        self.latest_seq
    }

    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::FetchSucceeded { seq, orders } => {
                if seq != self.latest_seq {
                    debug!(seq, latest = self.latest_seq, "discarding stale fetch result");
                    return;
                }
                self.orders = orders;
                self.error = None;
                self.loading = false;
            }
            BoardEvent::FetchFailed { seq, message } => {
                if seq != self.latest_seq {
                    debug!(seq, latest = self.latest_seq, "discarding stale fetch failure");
                    return;
                }
                // Keep the previous list; the error screen takes over until
                // a retry succeeds.
                self.error = Some(message);
                self.loading = false;
            }
            BoardEvent::DateChanged { date } => {
                // Recorded for the header only; the fetch is not
                // parameterized by date.
                self.selected_date = date;
            }
        }
    }
}
