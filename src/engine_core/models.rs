// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Domain models for user provisioning.
//!
//! Pure data structures describing subscribers and per-slot build outcomes.
//! Free of I/O side effects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine_core::accounts::EngineUser;

/// One subscriber row as delivered by the subscription-sync collaborator.
///
/// Read-only for the duration of a build call; this layer never writes back
/// to the subscription source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    /// Stable numeric identifier, unique panel-wide.
    pub uid: i64,
    /// Email-like display string. Must not contain the tag separator `|`;
    /// the subscription source guarantees that, not this layer.
    pub email: String,
    /// UUID-shaped token, used as identity or password depending on the
    /// inbound protocol.
    pub uuid: Uuid,
    /// Plaintext password for ciphered-secret protocols.
    pub passwd: String,
}

/// Per-subscriber outcome of a builder pass.
///
/// A failed slot stays in place so positional correspondence with the input
/// batch is preserved for the entries that did build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UserSlot {
    Built(EngineUser),
    Skipped { uid: i64, reason: String },
}

impl UserSlot {
    pub fn as_built(&self) -> Option<&EngineUser> {
        match self {
            UserSlot::Built(user) => Some(user),
            UserSlot::Skipped { .. } => None,
        }
    }

    pub fn into_built(self) -> Option<EngineUser> {
        match self {
            UserSlot::Built(user) => Some(user),
            UserSlot::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, UserSlot::Skipped { .. })
    }
}
