//! Asymmetric follow computation.
//!
//! Pure functions, no I/O.

use std::collections::BTreeSet;

use crate::types::{AccountName, RelationshipSets};

/// Compute the two one-sided relationships.
///
/// Returns `(only_following, only_followers)`:
/// - `only_following` = set(following) − set(followers)
/// - `only_followers` = set(followers) − set(following)
///
/// Duplicates in either input collapse silently. `user` is the
/// authenticated account; it is accepted for context and does not
/// affect the result.
pub fn asymmetric_sets(
    _user: &str,
    following: &[AccountName],
    followers: &[AccountName],
) -> (Vec<AccountName>, Vec<AccountName>) {
    let following: BTreeSet<&str> = following.iter().map(String::as_str).collect();
    let followers: BTreeSet<&str> = followers.iter().map(String::as_str).collect();

    let only_following = following
        .difference(&followers)
        .map(|s| s.to_string())
        .collect();
    let only_followers = followers
        .difference(&following)
        .map(|s| s.to_string())
        .collect();

    (only_following, only_followers)
}

impl RelationshipSets {
    /// Build sorted, deduplicated sets from raw following/followers lists.
    pub fn from_lists(user: &str, following: &[AccountName], followers: &[AccountName]) -> Self {
        let (mut only_following, mut only_followers) = asymmetric_sets(user, following, followers);
        only_following.sort();
        only_followers.sort();
        RelationshipSets {
            only_following,
            only_followers,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<AccountName> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn as_set(items: &[AccountName]) -> BTreeSet<&str> {
        items.iter().map(String::as_str).collect()
    }

    fn sets_of(following: &[&str], followers: &[&str]) -> (BTreeSet<String>, BTreeSet<String>) {
        let (a, b) = asymmetric_sets("me", &names(following), &names(followers));
        (a.into_iter().collect(), b.into_iter().collect())
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn standard_case_with_mutual_and_one_sided() {
        let (only_following, only_followers) = sets_of(
            &["alice", "bob", "charlie", "dave"],
            &["bob", "charlie", "eve", "frank"],
        );
        assert_eq!(only_following, set(&["alice", "dave"]));
        assert_eq!(only_followers, set(&["eve", "frank"]));
    }

    #[test]
    fn no_mutual_follows() {
        let (only_following, only_followers) = sets_of(&["alice", "bob"], &["charlie", "dave"]);
        assert_eq!(only_following, set(&["alice", "bob"]));
        assert_eq!(only_followers, set(&["charlie", "dave"]));
    }

    #[test]
    fn all_mutual_yields_nothing() {
        let (only_following, only_followers) = sets_of(&["alice", "bob"], &["alice", "bob"]);
        assert!(only_following.is_empty());
        assert!(only_followers.is_empty());
    }

    #[test]
    fn empty_inputs() {
        let (only_following, only_followers) = sets_of(&[], &[]);
        assert!(only_following.is_empty());
        assert!(only_followers.is_empty());

        let (only_following, only_followers) = sets_of(&[], &["alice", "bob"]);
        assert!(only_following.is_empty());
        assert_eq!(only_followers, set(&["alice", "bob"]));

        let (only_following, only_followers) = sets_of(&["alice", "bob"], &[]);
        assert_eq!(only_following, set(&["alice", "bob"]));
        assert!(only_followers.is_empty());
    }

    #[test]
    fn duplicates_in_following_collapse() {
        let (a, b) = asymmetric_sets("me", &names(&["alice", "bob", "alice"]), &names(&["bob", "charlie"]));
        assert_eq!(a, names(&["alice"]));
        assert_eq!(b, names(&["charlie"]));
    }

    #[test]
    fn duplicates_in_followers_collapse() {
        let (a, b) = asymmetric_sets("me", &names(&["alice", "bob"]), &names(&["bob", "charlie", "charlie"]));
        assert_eq!(a, names(&["alice"]));
        assert_eq!(b, names(&["charlie"]));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let (only_following, only_followers) = sets_of(&["Alice"], &["alice"]);
        assert_eq!(only_following, set(&["Alice"]));
        assert_eq!(only_followers, set(&["alice"]));
    }

    #[test]
    fn user_identity_does_not_affect_result() {
        let following = names(&["alice", "me"]);
        let followers = names(&["me", "bob"]);
        assert_eq!(
            asymmetric_sets("me", &following, &followers),
            asymmetric_sets("someone-else", &following, &followers)
        );
    }

    #[test]
    fn set_laws_hold() {
        let following = names(&["a", "b", "c", "c", "d", "x"]);
        let followers = names(&["c", "d", "e", "e", "f", "y"]);
        let (only_following, only_followers) = asymmetric_sets("me", &following, &followers);

        let following_set = as_set(&following);
        let followers_set = as_set(&followers);
        let mutual: BTreeSet<&str> = following_set.intersection(&followers_set).copied().collect();

        // Disjoint from the other side
        assert!(as_set(&only_following).is_disjoint(&followers_set));
        assert!(as_set(&only_followers).is_disjoint(&following_set));

        // Together with the mutual set, each side is reconstructed exactly
        let rebuilt_following: BTreeSet<&str> = as_set(&only_following).union(&mutual).copied().collect();
        let rebuilt_followers: BTreeSet<&str> = as_set(&only_followers).union(&mutual).copied().collect();
        assert_eq!(rebuilt_following, following_set);
        assert_eq!(rebuilt_followers, followers_set);
    }

    #[test]
    fn result_independent_of_order_and_multiplicity() {
        let a = sets_of(&["d", "a", "b"], &["b", "e"]);
        let b = sets_of(&["b", "a", "d", "a", "d"], &["e", "b", "e"]);
        assert_eq!(a, b);
    }

    #[test]
    fn from_lists_sorts_both_sides() {
        let sets = RelationshipSets::from_lists(
            "me",
            &names(&["zed", "amy", "mia", "amy"]),
            &names(&["mia", "yuri", "bea"]),
        );
        assert_eq!(sets.only_following, names(&["amy", "zed"]));
        assert_eq!(sets.only_followers, names(&["bea", "yuri"]));
    }
}
