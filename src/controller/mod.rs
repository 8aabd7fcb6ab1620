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

//! Inbound controller: turns subscriber batches into engine users.
//!
//! The controller is stateless aside from its configuration. Builders are
//! single-pass, synchronous, and never return a batch-level error; the
//! contract is always a best-effort collection.

mod user_builder;
mod validator;

pub use validator::{KeyLengthValidator, PassthroughValidator};

use std::sync::Arc;

use tracing::debug;

use crate::config::{Config, InboundProtocol};
use crate::engine_core::accounts::{Aead2022Family, EngineUser};
use crate::engine_core::errors::ProvisionError;
use crate::engine_core::models::{SubscriberRecord, UserSlot};
use crate::engine_core::traits::{SecretValidator, UserManager};

pub struct Controller {
    config: Arc<Config>,
    validator: Arc<dyn SecretValidator>,
    aead_2022: Aead2022Family,
}

impl Controller {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            validator: Arc::new(PassthroughValidator),
            aead_2022: Aead2022Family::default(),
        }
    }

    /// Substitute a stricter credential validator.
    pub fn with_validator(mut self, validator: Arc<dyn SecretValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Override the modern-AEAD family list.
    pub fn with_aead_2022(mut self, family: Aead2022Family) -> Self {
        self.aead_2022 = family;
        self
    }

    pub fn inbound_tag(&self) -> &str {
        &self.config.inbound_tag
    }

    /// Build users for the configured inbound protocol.
    ///
    /// Exactly one builder runs per call. The output has the input's length;
    /// only the ciphered-secret builder can leave `Skipped` slots.
    pub fn build_users(&self, subscribers: &[SubscriberRecord]) -> Vec<UserSlot> {
        match self.config.protocol {
            InboundProtocol::Vmess => self
                .build_identity_users(subscribers)
                .into_iter()
                .map(UserSlot::Built)
                .collect(),
            InboundProtocol::Trojan => self
                .build_shared_secret_users(subscribers)
                .into_iter()
                .map(UserSlot::Built)
                .collect(),
            InboundProtocol::Shadowsocks => {
                self.build_ciphered_users(subscribers, &self.config.cipher)
            }
        }
    }

    /// Build for the configured protocol and hand the usable credentials to
    /// the engine.
    ///
    /// Skipped slots are dropped here, so the engine receives a dense set
    /// that may be shorter than the input batch.
    pub async fn provision(
        &self,
        engine: &dyn UserManager,
        subscribers: &[SubscriberRecord],
    ) -> Result<usize, ProvisionError> {
        let slots = self.build_users(subscribers);
        let users: Vec<EngineUser> = slots.into_iter().filter_map(UserSlot::into_built).collect();
        debug!(
            inbound = %self.config.inbound_tag,
            built = users.len(),
            batch = subscribers.len(),
            "provisioning users"
        );
        engine.add_users(&self.config.inbound_tag, users).await
    }
}
