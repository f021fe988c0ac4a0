//! Live patient queue projection.
//!
//! Counts the whole token set and renders the waiting rows the current
//! viewer is allowed to see: a receptionist sees every waiting patient, a
//! doctor only their own.

use clinicdesk_auth::{Identity, Role};
use clinicdesk_feed::{Projector, Snapshot};
use clinicdesk_tokens::{Token, TokenId, TokenNumber, TokenStatus};

/// One rendered queue row (always a waiting token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRow {
    pub token_id: TokenId,
    pub token_number: TokenNumber,
    pub patient_name: String,
    pub status: TokenStatus,
}

/// Derived queue state for one viewer.
///
/// The counts cover the whole snapshot regardless of viewer; only the rows
/// are role-filtered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueView {
    pub rows: Vec<QueueRow>,
    pub total_count: usize,
    pub waiting_count: usize,
}

/// Queue projector scoped to one viewer.
///
/// The output is a total function of (snapshot, viewer): recomputed from
/// scratch on every delivery, no hidden state. Rows are sorted by ascending
/// token number (record id as tie-break), a deterministic order independent
/// of feed delivery order.
#[derive(Debug, Clone)]
pub struct QueueProjector {
    viewer: Identity,
}

impl QueueProjector {
    pub fn new(viewer: Identity) -> Self {
        Self { viewer }
    }

    pub fn viewer(&self) -> &Identity {
        &self.viewer
    }

    fn row_visible(&self, token: &Token) -> bool {
        if token.status != TokenStatus::Waiting {
            return false;
        }
        match self.viewer.role {
            Role::Receptionist => true,
            Role::Doctor => token.doctor_id == self.viewer.id,
            Role::Unknown => false,
        }
    }
}

impl Projector for QueueProjector {
    type Doc = Token;
    type View = QueueView;

    fn project(&self, snapshot: &Snapshot<Token>) -> QueueView {
        let mut view = QueueView::default();

        for token in snapshot {
            view.total_count += 1;
            if token.status == TokenStatus::Waiting {
                view.waiting_count += 1;
            }
            if self.row_visible(token) {
                view.rows.push(QueueRow {
                    token_id: token.id,
                    token_number: token.token_number,
                    patient_name: token.patient_name.clone(),
                    status: token.status,
                });
            }
        }

        view.rows
            .sort_by_key(|row| (row.token_number, row.token_id));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinicdesk_core::{RecordId, StaffId};

    fn waiting(doctor: StaffId, number: u32, name: &str) -> Token {
        Token::new_waiting(
            TokenId::new(RecordId::new()),
            name,
            doctor,
            TokenNumber::new(number).unwrap(),
            None,
        )
    }

    fn completed(doctor: StaffId, number: u32) -> Token {
        let mut token = waiting(doctor, number, "Completed Patient");
        token.complete("Flu", "Fluids").unwrap();
        token
    }

    fn receptionist() -> Identity {
        Identity::new(StaffId::new(), "Front Desk", Role::Receptionist)
    }

    fn doctor(id: StaffId) -> Identity {
        Identity::new(id, "Dr. Ruiz", Role::Doctor)
    }

    #[test]
    fn empty_snapshot_yields_zero_counts_and_no_rows() {
        let view = QueueProjector::new(receptionist()).project(&Snapshot::empty());
        assert_eq!(view, QueueView::default());
    }

    #[test]
    fn counts_cover_the_whole_snapshot_regardless_of_viewer() {
        let dr_a = StaffId::new();
        let dr_b = StaffId::new();
        let snapshot = Snapshot::new(vec![
            waiting(dr_a, 1001, "A"),
            waiting(dr_b, 1002, "B"),
            completed(dr_b, 1003),
        ]);

        for projector in [
            QueueProjector::new(receptionist()),
            QueueProjector::new(doctor(dr_a)),
        ] {
            let view = projector.project(&snapshot);
            assert_eq!(view.total_count, 3);
            assert_eq!(view.waiting_count, 2);
        }
    }

    #[test]
    fn receptionist_sees_exactly_the_waiting_tokens() {
        let dr = StaffId::new();
        let snapshot = Snapshot::new(vec![
            waiting(dr, 1002, "B"),
            waiting(dr, 1001, "A"),
            completed(dr, 1003),
        ]);

        let view = QueueProjector::new(receptionist()).project(&snapshot);
        assert_eq!(view.rows.len(), 2);
        assert!(view.rows.iter().all(|r| r.status == TokenStatus::Waiting));
    }

    #[test]
    fn doctor_sees_only_their_own_waiting_tokens() {
        let dr_a = StaffId::new();
        let dr_b = StaffId::new();
        let snapshot = Snapshot::new(vec![
            waiting(dr_a, 1001, "Mine"),
            waiting(dr_b, 1002, "Someone else's"),
        ]);

        let view = QueueProjector::new(doctor(dr_a)).project(&snapshot);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].patient_name, "Mine");
        assert_eq!(view.waiting_count, 2);
    }

    #[test]
    fn unknown_role_sees_counts_but_no_rows() {
        let dr = StaffId::new();
        let viewer = Identity::new(StaffId::new(), "Mystery", Role::Unknown);
        let snapshot = Snapshot::new(vec![waiting(dr, 1001, "A")]);

        let view = QueueProjector::new(viewer).project(&snapshot);
        assert!(view.rows.is_empty());
        assert_eq!(view.waiting_count, 1);
    }

    #[test]
    fn rows_are_sorted_by_token_number() {
        let dr = StaffId::new();
        let snapshot = Snapshot::new(vec![
            waiting(dr, 9001, "Later"),
            waiting(dr, 1001, "First"),
            waiting(dr, 4242, "Middle"),
        ]);

        let view = QueueProjector::new(receptionist()).project(&snapshot);
        let numbers: Vec<u32> = view.rows.iter().map(|r| r.token_number.value()).collect();
        assert_eq!(numbers, vec![1001, 4242, 9001]);
    }
}
