//! Relationship guards for favorites, shopping-cart purchases and follows.
//!
//! All three associations share one contract: adding an existing pair reports
//! "already exists" and removing a missing pair reports "not found". Neither
//! case changes storage. The database enforces uniqueness; these helpers only
//! build the matching errors and the self-follow rule.

use crate::error::CoreError;
use crate::types::DbId;

/// The kind of user-to-target association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// User -> recipe, `favorites` table.
    Favorite,
    /// User -> recipe, `purchases` table (the shopping cart).
    Purchase,
    /// User -> author, `follows` table.
    Follow,
}

impl RelationKind {
    /// Human-readable target collection, used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            RelationKind::Favorite => "favorites",
            RelationKind::Purchase => "shopping cart",
            RelationKind::Follow => "subscriptions",
        }
    }
}

/// Outcome of an add attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome<T> {
    Created(T),
    AlreadyExists,
}

/// Outcome of a remove attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

impl RemoveOutcome {
    pub fn from_removed(removed: bool) -> Self {
        if removed {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }
}

/// Convert an add outcome into the created value or an `AlreadyExists` error.
pub fn require_created<T>(
    outcome: AddOutcome<T>,
    kind: RelationKind,
    target_id: DbId,
) -> Result<T, CoreError> {
    match outcome {
        AddOutcome::Created(value) => Ok(value),
        AddOutcome::AlreadyExists => Err(CoreError::AlreadyExists(format!(
            "{target_id} is already in {}",
            kind.label()
        ))),
    }
}

/// Convert a remove outcome into `()` or a `RelationNotFound` error.
pub fn require_removed(
    outcome: RemoveOutcome,
    kind: RelationKind,
    target_id: DbId,
) -> Result<(), CoreError> {
    match outcome {
        RemoveOutcome::Removed => Ok(()),
        RemoveOutcome::NotFound => Err(CoreError::RelationNotFound(format!(
            "{target_id} is not in {}",
            kind.label()
        ))),
    }
}

/// A user may not subscribe to themselves.
pub fn validate_follow_target(user_id: DbId, author_id: DbId) -> Result<(), CoreError> {
    if user_id == author_id {
        return Err(CoreError::Validation(
            "You cannot subscribe to yourself".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn created_passes_value_through() {
        let value = require_created(AddOutcome::Created(42), RelationKind::Favorite, 1).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn already_exists_becomes_error() {
        let err = require_created::<()>(AddOutcome::AlreadyExists, RelationKind::Purchase, 3)
            .unwrap_err();
        assert_matches!(err, CoreError::AlreadyExists(msg) if msg.contains("shopping cart"));
    }

    #[test]
    fn missing_relation_becomes_error() {
        let err = require_removed(RemoveOutcome::NotFound, RelationKind::Follow, 9).unwrap_err();
        assert_matches!(err, CoreError::RelationNotFound(msg) if msg.contains("subscriptions"));
        assert!(require_removed(RemoveOutcome::Removed, RelationKind::Follow, 9).is_ok());
    }

    #[test]
    fn remove_outcome_from_bool() {
        assert_eq!(RemoveOutcome::from_removed(true), RemoveOutcome::Removed);
        assert_eq!(RemoveOutcome::from_removed(false), RemoveOutcome::NotFound);
    }

    #[test]
    fn self_follow_rejected() {
        assert_matches!(validate_follow_target(4, 4), Err(CoreError::Validation(_)));
        assert!(validate_follow_target(4, 5).is_ok());
    }
}
