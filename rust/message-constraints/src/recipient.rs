//
// Copyright (C) 2026 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Recipient snapshots and the local user's own identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a recipient row in the local database.
///
/// Only meaningful on the device that assigned it; recipient ids never go over the wire.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientId(u64);

impl RecipientId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// The decimal string form used when a recipient id is stored in a text column.
    pub fn serialize(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecipientId({})", self.0)
    }
}

#[derive(Debug, thiserror::Error, displaydoc::Display)]
#[cfg_attr(test, derive(PartialEq))]
/// '{0}' is not a valid serialized recipient id
pub struct InvalidRecipientIdError(String);

impl FromStr for RecipientId {
    type Err = InvalidRecipientIdError;

    fn from_str(serialized: &str) -> Result<Self, Self::Err> {
        serialized
            .parse::<u64>()
            .map(Self)
            .map_err(|_| InvalidRecipientIdError(serialized.to_owned()))
    }
}

/// What kind of conversation partner a [`Recipient`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RecipientKind {
    /// Another user, in a one-to-one conversation.
    Contact,
    /// The local user's own Note to Self conversation.
    Self_,
    /// A group conversation. `active` becomes false once the local user leaves or is removed.
    Group { active: bool },
}

/// Read-only snapshot of a recipient, resolved by the caller's directory layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub id: RecipientId,
    pub kind: RecipientKind,
}

impl Recipient {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, RecipientKind::Group { .. })
    }

    pub fn is_active_group(&self) -> bool {
        matches!(self.kind, RecipientKind::Group { active: true })
    }

    pub fn is_self(&self) -> bool {
        matches!(self.kind, RecipientKind::Self_)
    }
}

/// The local user's own recipient identity, passed explicitly to
/// [`ConstraintEvaluator`](crate::ConstraintEvaluator).
///
/// During account bootstrap there is a window where no self recipient exists yet. Callers
/// evaluating constraints in that window pass [`LocalIdentity::Unresolved`], which treats
/// every id as "not self". Callers that need to distinguish "unknown" from "definitively not
/// self" must check for `Unresolved` themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalIdentity {
    Unresolved,
    Resolved(RecipientId),
}

impl LocalIdentity {
    pub fn is_self(&self, id: RecipientId) -> bool {
        match self {
            Self::Resolved(self_id) => *self_id == id,
            Self::Unresolved => false,
        }
    }
}
