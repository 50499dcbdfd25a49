//
// Copyright (C) 2026 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Validity rules for remote message mutations: delete-for-everyone and edits.
//!
//! Given a snapshot of a message and a proposed mutation, the checks in this crate answer
//! whether the mutation is permitted right now, both when initiating it locally and when
//! accepting a notification from another device. They enforce time windows, sender identity,
//! and message-kind restrictions; they never perform the mutation itself.

pub mod constraints;
pub mod message;
pub mod recipient;
pub mod timestamp;

pub use constraints::{
    edit_threshold_hours, ConstraintEvaluator, DELETE_SEND_THRESHOLD, EDIT_SEND_THRESHOLD,
    MAX_EDIT_COUNT, RECEIVE_THRESHOLD,
};
pub use message::{Direction, MessageRecord};
pub use recipient::{LocalIdentity, Recipient, RecipientId, RecipientKind};
pub use timestamp::{Duration, Timestamp};
