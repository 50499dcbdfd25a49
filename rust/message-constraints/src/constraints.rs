//
// Copyright (C) 2026 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Admission rules for remote deletes and message edits.
//!
//! Both mutations have strict time limits. The receive-side checks decide whether a
//! notification from another device is consistent with who could plausibly have sent it and
//! arrives within the allowed window; the send-side checks decide whether the local user may
//! initiate the mutation at all.

use crate::message::MessageRecord;
use crate::recipient::{LocalIdentity, Recipient, RecipientId};
use crate::timestamp::{Duration, Timestamp};

/// How long after a message's server timestamp we still accept a remote delete or edit of it.
pub const RECEIVE_THRESHOLD: Duration = Duration::from_hours(24);

/// How long after sending a message its author may still delete it for everyone.
pub const DELETE_SEND_THRESHOLD: Duration = Duration::from_hours(3);

/// How long after sending a message its author may still edit it.
///
/// Currently the same span as [`DELETE_SEND_THRESHOLD`]; that is incidental, and the two may
/// diverge without touching each other's checks.
pub const EDIT_SEND_THRESHOLD: Duration = Duration::from_hours(3);

/// Maximum number of edits a single message may accumulate.
pub const MAX_EDIT_COUNT: u32 = 10;

/// The edit send window in whole hours, for UI copy.
pub const fn edit_threshold_hours() -> u64 {
    EDIT_SEND_THRESHOLD.as_hours()
}

/// Decides whether remote deletes and edits are permitted, both when initiating them locally
/// and when accepting notifications from other devices.
///
/// Every check is a pure predicate over the snapshots passed in; the only state is the local
/// user's identity, fixed at construction. An [`Unresolved`](LocalIdentity::Unresolved)
/// identity makes every self-comparison false.
#[derive(Clone, Copy, Debug)]
pub struct ConstraintEvaluator {
    local_identity: LocalIdentity,
}

impl ConstraintEvaluator {
    pub fn new(local_identity: LocalIdentity) -> Self {
        Self { local_identity }
    }

    /// Whether an incoming "delete this message" instruction should be honored.
    ///
    /// `delete_server_timestamp` is the server timestamp of the delete itself, not of the
    /// message it targets.
    pub fn is_valid_remote_delete_receive(
        &self,
        target: &MessageRecord,
        delete_sender: RecipientId,
        delete_server_timestamp: Timestamp,
    ) -> bool {
        let self_is_delete_sender = self.local_identity.is_self(delete_sender);
        let is_own_outgoing_delete = self_is_delete_sender && target.is_outgoing();

        // A delete of your own sent message may only be claimed by you; a delete of a message
        // someone else sent may only be claimed by them.
        let valid_direction = self_is_delete_sender == target.is_outgoing();

        // The stored sender of an outgoing message can differ from self (Note to Self, linked
        // devices), so a self-claimed delete of an outgoing message passes regardless.
        let valid_sender = target.from_recipient == delete_sender || is_own_outgoing_delete;

        // Outgoing messages are aged from when they were authored, incoming ones from when the
        // server accepted them. A self-delete of an own outgoing message skips the window
        // entirely: the send-side window already bounded it.
        let reference_timestamp = if is_own_outgoing_delete {
            target.date_sent
        } else {
            target.server_timestamp
        };
        let within_window = delete_server_timestamp.saturating_elapsed_since(reference_timestamp)
            < RECEIVE_THRESHOLD;

        let valid = valid_direction && valid_sender && (within_window || is_own_outgoing_delete);
        if !valid {
            log::debug!(
                "rejecting mutation of message from {:?} claimed by {delete_sender:?}: \
                 valid_direction={valid_direction} valid_sender={valid_sender} \
                 within_window={within_window}",
                target.from_recipient,
            );
        }
        valid
    }

    /// Whether an incoming edit should be applied to `target`.
    ///
    /// Edits and remote deletes share the same identity and timing admission policy; only
    /// send-side eligibility differs.
    pub fn is_valid_edit_message_receive(
        &self,
        target: &MessageRecord,
        edit_sender: &Recipient,
        edit_server_timestamp: Timestamp,
    ) -> bool {
        self.is_valid_remote_delete_receive(target, edit_sender.id, edit_server_timestamp)
    }

    /// Whether a delete-for-everyone may be issued for every message in `targets`.
    ///
    /// All-or-nothing: a single ineligible message fails the whole batch.
    pub fn is_valid_remote_delete_send<'a>(
        &self,
        targets: impl IntoIterator<Item = &'a MessageRecord>,
        current_time: Timestamp,
    ) -> bool {
        targets
            .into_iter()
            .all(|message| Self::can_send_remote_delete(message, current_time, DELETE_SEND_THRESHOLD))
    }

    /// Whether `target` can be edited as of `current_time`.
    pub fn is_valid_edit_message_send(
        &self,
        target: &MessageRecord,
        current_time: Timestamp,
    ) -> bool {
        Self::can_send_remote_delete(target, current_time, EDIT_SEND_THRESHOLD)
            && target.revision_number < MAX_EDIT_COUNT
            && !target.is_view_once
            && !target.has_audio
            && !target.has_shared_contact
    }

    /// Whether `target` was ever eligible for editing, regardless of how long ago it was sent.
    ///
    /// Evaluates the send checks as of the message's own `date_sent`. Use this for a pure
    /// attribute check, not a live gate.
    pub fn is_edit_message_send_ever_valid(&self, target: &MessageRecord) -> bool {
        self.is_valid_edit_message_send(target, target.date_sent)
    }

    fn can_send_remote_delete(
        message: &MessageRecord,
        current_time: Timestamp,
        send_window: Duration,
    ) -> bool {
        !message.is_update
            && message.is_outgoing()
            && message.is_push
            && (!message.to_recipient.is_group() || message.to_recipient.is_active_group())
            && !message.is_remote_delete
            && !message.has_gift_badge
            && !message.is_payment_notification
            // Note to Self is exempt from the send window.
            && (current_time.saturating_elapsed_since(message.date_sent) < send_window
                || message.to_recipient.is_self())
    }
}
