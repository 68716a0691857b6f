//! Race-safe state for one incremental search interaction.
//!
//! Each dispatched resolution is keyed by a monotonically increasing
//! sequence number. Any completion whose ticket no longer matches the live
//! sequence is discarded, so a slow early response can never overwrite a
//! newer result set or a cleared input.

use serde::{Deserialize, Serialize};

/// Identifies one dispatched resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession<T> {
    input: String,
    seq: u64,
    results: Vec<T>,
}

impl<T> Default for SearchSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchSession<T> {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            seq: 0,
            results: Vec::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Registers a keystroke. Bumps the sequence number so any pending
    /// resolution becomes stale. Empty input clears the result set
    /// immediately and dispatches nothing.
    pub fn input_changed(&mut self, text: &str) -> Option<SearchTicket> {
        self.seq += 1;
        self.input = text.to_string();
        if text.trim().is_empty() {
            self.results.clear();
            return None;
        }
        Some(SearchTicket {
            seq: self.seq,
            query: text.trim().to_string(),
        })
    }

    /// True while the ticket is still the latest dispatched one. The quiet
    /// period timer consults this before issuing the remote call, and the
    /// completion handler before applying results.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.seq
    }

    /// Applies a resolved candidate set. A superseded ticket is discarded
    /// and leaves the session untouched. Failed resolutions simply never
    /// call this, keeping prior results visible.
    pub fn apply(&mut self, ticket: &SearchTicket, results: Vec<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.results = results;
        true
    }

    /// Replaces the visible input with the committed candidate's display
    /// label, closes out the candidate list and invalidates anything
    /// pending.
    pub fn commit(&mut self, label: &str) {
        self.seq += 1;
        self.input = label.to_string();
        self.results.clear();
    }

    /// Resets the session after the input is abandoned; pending
    /// resolutions become stale.
    pub fn clear(&mut self) {
        self.seq += 1;
        self.input.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rapid_keystrokes_leave_one_live_ticket() {
        let mut session = SearchSession::<u64>::new();
        let t1 = session.input_changed("a").unwrap();
        let t2 = session.input_changed("ab").unwrap();
        let t3 = session.input_changed("abc").unwrap();

        assert!(!session.is_current(&t1));
        assert!(!session.is_current(&t2));
        assert!(session.is_current(&t3));
        assert_eq!(t3.query, "abc");
    }

    #[test]
    fn clearing_input_within_quiet_period_issues_nothing() {
        let mut session = SearchSession::<u64>::new();
        let ticket = session.input_changed("abc").unwrap();
        assert_eq!(session.input_changed(""), None);

        // the pending ticket is stale, so the timer never dispatches
        assert!(!session.is_current(&ticket));
        assert!(session.results().is_empty());
    }

    #[test]
    fn late_completion_cannot_overwrite_newer_result() {
        let mut session = SearchSession::<u64>::new();
        let t1 = session.input_changed("al").unwrap();
        let t2 = session.input_changed("alpha").unwrap();

        assert!(session.apply(&t2, vec![20, 21]));
        // first resolution completes after the second: discarded
        assert!(!session.apply(&t1, vec![10]));
        assert_eq!(session.results(), &[20, 21]);
    }

    #[test]
    fn late_completion_cannot_repopulate_cleared_input() {
        let mut session = SearchSession::<u64>::new();
        let ticket = session.input_changed("alpha").unwrap();
        session.input_changed("");

        assert!(!session.apply(&ticket, vec![1, 2, 3]));
        assert!(session.results().is_empty());
    }

    #[test]
    fn whitespace_only_input_counts_as_empty() {
        let mut session = SearchSession::<u64>::new();
        assert_eq!(session.input_changed("   "), None);
        assert_eq!(session.input(), "   ");
    }

    #[test]
    fn commit_shows_label_and_invalidates_pending_ticket() {
        let mut session = SearchSession::<u64>::new();
        let ticket = session.input_changed("acme").unwrap();
        session.commit("Acme Markets (ACM)");

        assert_eq!(session.input(), "Acme Markets (ACM)");
        assert!(session.results().is_empty());
        assert!(!session.apply(&ticket, vec![1]));
    }

    #[test]
    fn clear_invalidates_pending_ticket() {
        let mut session = SearchSession::<u64>::new();
        let ticket = session.input_changed("beta").unwrap();
        session.apply(&ticket, vec![7]);
        session.clear();
        assert!(session.results().is_empty());
        assert!(!session.is_current(&ticket));
    }
}
