//! Shared, in-memory state of the activity roster.
//!
//! `ActivitiesState` is created in `main.rs` and injected into the Actix
//! application as `web::Data`. All handlers under `/activities` go through it:
//! - `snapshot` takes the read lock and clones the roster for `GET /activities`.
//! - `sign_up` and `unregister` take the write lock for the whole
//!   check-then-mutate sequence, so two concurrent signups for the same email
//!   can never both succeed.
//!
//! Nothing is persisted; a restart brings back the seed roster.

use crate::error::RosterError;
use common::model::activity::Activity;
use common::model::roster::Roster;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ActivitiesState {
    /// The single source of truth for activities and their participants.
    pub roster: Arc<RwLock<Roster>>,
}

impl ActivitiesState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    /// State preloaded with the default activities.
    pub fn seeded() -> Self {
        Self::new(seed_roster())
    }

    pub async fn snapshot(&self) -> Roster {
        self.roster.read().await.clone()
    }

    /// Appends `email` to the participants of `activity`.
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let email = normalize_email(email)?;
        let mut roster = self.roster.write().await;
        let record = roster
            .get_mut(activity)
            .ok_or(RosterError::ActivityNotFound)?;

        if record.has_participant(email) {
            return Err(RosterError::AlreadySignedUp);
        }
        if record.is_full() {
            return Err(RosterError::ActivityFull);
        }

        record.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the participants of `activity`.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let email = normalize_email(email)?;
        let mut roster = self.roster.write().await;
        let record = roster
            .get_mut(activity)
            .ok_or(RosterError::ActivityNotFound)?;

        let position = record
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::NotSignedUp)?;
        record.participants.remove(position);
        Ok(())
    }
}

fn normalize_email(email: &str) -> Result<&str, RosterError> {
    let email = email.trim();
    if email.is_empty() {
        Err(RosterError::MissingEmail)
    } else {
        Ok(email)
    }
}

/// The activities a fresh server starts with.
pub fn seed_roster() -> Roster {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
    ]
    .into_iter()
    .collect()
}
