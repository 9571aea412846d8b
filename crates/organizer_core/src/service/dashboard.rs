//! Dashboard overview projection.
//!
//! Chart series are rendered elsewhere; this module only produces the counts
//! and the reminder list the dashboard shows.

use crate::model::record::RecordId;
use crate::service::organizer::Organizer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderRow {
    pub id: RecordId,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub contact_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub contact_count: usize,
    pub reminder_count: usize,
    pub note_count: usize,
    pub emergency_contact_count: usize,
    /// Reminders ordered by `(date, time, id)`.
    pub upcoming: Vec<ReminderRow>,
}

impl DashboardSummary {
    /// Builds the overview, keeping at most `limit` upcoming reminders.
    pub fn build(organizer: &Organizer, limit: Option<usize>) -> Self {
        let mut reminders: Vec<_> = organizer.reminders().iter().collect();
        reminders.sort_by(|a, b| (&a.date, &a.time, a.id).cmp(&(&b.date, &b.time, b.id)));

        let upcoming = reminders
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|reminder| ReminderRow {
                id: reminder.id,
                title: reminder.title.clone(),
                date: reminder.date.clone(),
                time: reminder.time.clone(),
                kind: reminder.kind.clone(),
                contact_name: organizer
                    .contact_name(reminder.contact_id)
                    .map(str::to_string),
            })
            .collect();

        Self {
            contact_count: organizer.contacts().len(),
            reminder_count: organizer.reminders().len(),
            note_count: organizer.notes().len(),
            emergency_contact_count: organizer.emergency_contacts().len(),
            upcoming,
        }
    }
}
