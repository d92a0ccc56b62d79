//! Derived Views
//!
//! Pure functions from a complaint collection to what the dashboard,
//! recent table and history grid display. Nothing here touches storage.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Complaint, Status};

/// Dashboard counters. `pending + resolved == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub resolved: usize,
}

pub fn stats(complaints: &[Complaint]) -> Stats {
    complaints.iter().fold(Stats::default(), |mut acc, c| {
        acc.total += 1;
        match c.status {
            Status::Pending => acc.pending += 1,
            Status::Resolved => acc.resolved += 1,
        }
        acc
    })
}

/// A list view that renders a placeholder instead of an empty table
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty,
    Rows(Vec<Complaint>),
}

impl ListView {
    fn from_vec(rows: Vec<Complaint>) -> Self {
        if rows.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(rows)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty)
    }

    pub fn rows(&self) -> &[Complaint] {
        match self {
            ListView::Empty => &[],
            ListView::Rows(rows) => rows,
        }
    }
}

/// First `n` complaints in stored (newest-first) order.
/// `Empty` only when there are no complaints at all.
pub fn recent(complaints: &[Complaint], n: usize) -> ListView {
    if complaints.is_empty() {
        return ListView::Empty;
    }
    ListView::Rows(complaints.iter().take(n).cloned().collect())
}

/// Card grid for the history view
pub fn history(complaints: &[Complaint]) -> ListView {
    ListView::from_vec(complaints.to_vec())
}

/// Case-insensitive substring filter over subject, description and id.
/// An empty term keeps everything.
pub fn search(complaints: &[Complaint], term: &str) -> Vec<Complaint> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return complaints.to_vec();
    }
    complaints.iter().filter(|c| c.matches(&needle)).cloned().collect()
}

/// Header date, e.g. "Saturday, October 17, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
