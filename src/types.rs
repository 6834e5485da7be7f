//! Domain types for gh-mutual-follow.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Login of a remote account.
///
/// Opaque and case-sensitive: "Alice" and "alice" are different accounts.
/// No normalization is performed anywhere in the crate.
pub type AccountName = String;

// ============================================================================
// ENUMS
// ============================================================================

/// Which of the two lists has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Accounts I follow that don't follow me back.
    #[default]
    Following,
    /// Accounts following me that I don't follow back.
    Followers,
}

impl Pane {
    /// The other pane.
    pub fn toggled(self) -> Self {
        match self {
            Pane::Following => Pane::Followers,
            Pane::Followers => Pane::Following,
        }
    }

    /// The action that resolves an asymmetry listed in this pane.
    ///
    /// Following → unfollow them; Followers → follow them back.
    pub fn action(self) -> RelationAction {
        match self {
            Pane::Following => RelationAction::Unfollow,
            Pane::Followers => RelationAction::Follow,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pane::Following => "Following",
            Pane::Followers => "Followers",
        }
    }
}

/// A mutation of a follow relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationAction {
    Follow,
    Unfollow,
}

impl RelationAction {
    /// Imperative verb: "follow" / "unfollow".
    pub fn verb(self) -> &'static str {
        match self {
            RelationAction::Follow => "follow",
            RelationAction::Unfollow => "unfollow",
        }
    }

    /// Past tense with a capital, for status lines: "Followed" / "Unfollowed".
    pub fn past_tense(self) -> &'static str {
        match self {
            RelationAction::Follow => "Followed",
            RelationAction::Unfollow => "Unfollowed",
        }
    }
}

impl fmt::Display for RelationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

// ============================================================================
// STRUCTS
// ============================================================================

/// The two asymmetric differences between following and followers.
///
/// Invariant: both vectors are sorted ascending and free of duplicates.
/// Built fresh on every load, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipSets {
    /// I follow them, they don't follow me.
    pub only_following: Vec<AccountName>,
    /// They follow me, I don't follow them.
    pub only_followers: Vec<AccountName>,
}

/// Payload of a successful data load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedData {
    /// The authenticated account.
    pub user: AccountName,
    #[serde(flatten)]
    pub sets: RelationshipSets,
}

/// What happened during a bulk pass.
///
/// Individual failures do not abort the pass; they are only counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome {
    pub action: RelationAction,
    pub attempted: usize,
    pub failed: usize,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the non-interactive report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_toggles_between_both_values() {
        assert_eq!(Pane::Following.toggled(), Pane::Followers);
        assert_eq!(Pane::Followers.toggled(), Pane::Following);
        assert_eq!(Pane::default(), Pane::Following);
    }

    #[test]
    fn pane_implies_opposite_action() {
        assert_eq!(Pane::Following.action(), RelationAction::Unfollow);
        assert_eq!(Pane::Followers.action(), RelationAction::Follow);
    }

    #[test]
    fn loaded_data_serializes_flat() {
        let data = LoadedData {
            user: "alice".into(),
            sets: RelationshipSets {
                only_following: vec!["bob".into()],
                only_followers: vec![],
            },
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["user"], "alice");
        assert_eq!(json["only_following"][0], "bob");
        assert!(json["only_followers"].as_array().unwrap().is_empty());
    }
}
