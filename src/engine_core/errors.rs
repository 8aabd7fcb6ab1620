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

// Domain error types

use thiserror::Error;

/// Per-subscriber credential validation failure.
///
/// Always recovered locally: the offending slot is logged and skipped,
/// never fatal to the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Secret is not valid base64 (2022 keys come from `openssl rand -base64`).
    #[error("key is not valid base64: {0}")]
    MalformedKey(String),

    /// Secret decodes to the wrong byte length for the chosen cipher.
    #[error("key for {cipher} must decode to {expected} bytes, got {actual}")]
    KeyLength {
        cipher: String,
        expected: usize,
        actual: usize,
    },

    /// Secret rejected by a deployment-specific validator.
    #[error("key rejected: {0}")]
    Rejected(String),
}

/// Engine-boundary failure surfaced by a `UserManager` implementation.
///
/// The builders themselves never produce this; the batch contract is
/// best-effort and batch-level failures exist only at the engine seam.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// The engine has no inbound registered under the given tag.
    #[error("unknown inbound tag '{0}'")]
    UnknownInbound(String),

    /// The engine rejected the user set for the given inbound.
    #[error("engine rejected users for inbound '{inbound_tag}': {reason}")]
    EngineRejected { inbound_tag: String, reason: String },

    /// Transport failure while talking to the engine API.
    #[error("engine transport error: {0}")]
    Transport(String),
}
