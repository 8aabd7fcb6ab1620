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

//! Seams to the engine and to the credential-validation strategy.

use async_trait::async_trait;

use crate::engine_core::accounts::EngineUser;
use crate::engine_core::errors::{ProvisionError, ValidationError};
use crate::engine_core::types::DerivedKey;

/// Pre-check a subscriber's raw secret before it is wrapped into a
/// 2022-family account.
///
/// Contract: an `Err` means "skip this subscriber", never "abort the batch".
/// Implementations may derive or transform the key; the default pass-through
/// echoes it unchanged.
pub trait SecretValidator: Send + Sync {
    fn validate(&self, secret: &str, cipher_name: &str) -> Result<DerivedKey, ValidationError>;
}

/// The proxy engine's user-management API.
///
/// Implemented by whatever talks to the running engine; the controller only
/// depends on this trait.
#[async_trait]
pub trait UserManager: Send + Sync {
    /// Register users on an inbound. Returns how many the engine accepted.
    async fn add_users(
        &self,
        inbound_tag: &str,
        users: Vec<EngineUser>,
    ) -> Result<usize, ProvisionError>;

    /// Remove users from an inbound by identity tag.
    async fn remove_users(
        &self,
        inbound_tag: &str,
        emails: Vec<String>,
    ) -> Result<(), ProvisionError>;
}
