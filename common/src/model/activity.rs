use serde::{Deserialize, Serialize};

/// A single extracurricular activity as served by `GET /activities`.
///
/// The record is keyed by its name inside a [`Roster`](crate::model::roster::Roster),
/// so the name itself is not part of the struct.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Activity {
    /// Free text shown under the card title.
    pub description: String,
    /// Human readable schedule, e.g. `"Fridays, 3:30 PM - 5:00 PM"`.
    pub schedule: String,
    /// Capacity of the activity. Rendered as-is, never escaped.
    pub max_participants: u32,
    /// Participant emails in server order. Display order only; uniqueness is
    /// enforced by the server.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_full(&self) -> bool {
        self.participant_count() >= self.max_participants as usize
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
