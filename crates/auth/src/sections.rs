use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Role;

/// Dashboard sections gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Landing view with the live statistics tiles.
    Home,
    /// Doctor's personal patient queue.
    Queue,
    /// Token generation form (new patient registration).
    Generate,
    /// Completed consultations awaiting billing.
    Billing,
}

/// Which sections a role may open.
///
/// - receptionist → home, generate, billing
/// - doctor → home, queue
/// - anything else → home only (fail open to minimal access, never lock the
///   account out entirely)
pub fn visible_sections(role: Role) -> BTreeSet<Section> {
    let sections: &[Section] = match role {
        Role::Receptionist => &[Section::Home, Section::Generate, Section::Billing],
        Role::Doctor => &[Section::Home, Section::Queue],
        Role::Unknown => &[Section::Home],
    };
    sections.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receptionist_sees_front_desk_sections() {
        let sections = visible_sections(Role::Receptionist);
        assert_eq!(
            sections,
            BTreeSet::from([Section::Home, Section::Generate, Section::Billing])
        );
    }

    #[test]
    fn doctor_sees_home_and_queue() {
        let sections = visible_sections(Role::Doctor);
        assert_eq!(sections, BTreeSet::from([Section::Home, Section::Queue]));
    }

    #[test]
    fn unknown_role_falls_back_to_home_only() {
        assert_eq!(visible_sections(Role::Unknown), BTreeSet::from([Section::Home]));
    }
}
