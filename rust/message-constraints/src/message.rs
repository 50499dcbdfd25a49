//
// Copyright (C) 2026 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::Serialize;

use crate::recipient::{Recipient, RecipientId};
use crate::timestamp::Timestamp;

/// Whether a message was authored on this device or received from elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Read-only snapshot of a message row, owned by the caller.
///
/// The constraint checks only ever read these attributes; re-evaluate with a fresh snapshot
/// after the underlying row changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageRecord {
    pub from_recipient: RecipientId,
    pub to_recipient: Recipient,
    pub direction: Direction,
    /// When the author hit send.
    pub date_sent: Timestamp,
    /// When the transport layer accepted the message.
    pub server_timestamp: Timestamp,
    /// Number of edits already applied.
    pub revision_number: u32,
    /// Already deleted for everyone.
    pub is_remote_delete: bool,
    /// A system/control update rather than user content.
    pub is_update: bool,
    /// Delivered over the push transport rather than a local-only placeholder.
    pub is_push: bool,
    pub is_view_once: bool,
    pub has_audio: bool,
    pub has_shared_contact: bool,
    pub has_gift_badge: bool,
    pub is_payment_notification: bool,
}

impl MessageRecord {
    pub fn is_outgoing(&self) -> bool {
        self.direction == Direction::Outgoing
    }
}
