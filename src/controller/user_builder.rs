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

//! Per-protocol user builders.
//!
//! Each builder consumes the whole subscriber batch and returns a same-length
//! collection. Only the ciphered-secret builder has a rejection path, and a
//! rejected subscriber occupies its slot as `Skipped` rather than shifting
//! later entries: one malformed subscriber must not block provisioning for
//! the rest of the batch.

use tracing::error;

use crate::engine_core::accounts::{Account, CipherKind, EngineUser, SecurityNegotiation};
use crate::engine_core::constants::provision::{TAG_SEPARATOR, USER_LEVEL};
use crate::engine_core::models::{SubscriberRecord, UserSlot};

use super::Controller;

impl Controller {
    /// Identity tag: `tag|email|uid`, the engine's per-user accounting key.
    ///
    /// Unique per (inbound, subscriber) as long as the email field carries no
    /// separator character; the subscription source guarantees that upstream.
    pub fn build_user_tag(&self, subscriber: &SubscriberRecord) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.inbound_tag(),
            subscriber.email,
            subscriber.uid,
            sep = TAG_SEPARATOR
        )
    }

    /// Identity-based accounts (vmess-like inbounds).
    ///
    /// Total: every subscriber builds. The UUID token is the identity and
    /// security negotiation is left to the engine.
    pub fn build_identity_users(&self, subscribers: &[SubscriberRecord]) -> Vec<EngineUser> {
        subscribers
            .iter()
            .map(|sub| EngineUser {
                level: USER_LEVEL,
                email: self.build_user_tag(sub),
                account: Account::Identity {
                    id: sub.uuid,
                    security: SecurityNegotiation::Auto,
                },
            })
            .collect()
    }

    /// Shared-secret accounts (trojan-like inbounds).
    ///
    /// Total: every subscriber builds. The UUID token doubles as the shared
    /// secret, forwarded verbatim.
    pub fn build_shared_secret_users(&self, subscribers: &[SubscriberRecord]) -> Vec<EngineUser> {
        subscribers
            .iter()
            .map(|sub| EngineUser {
                level: USER_LEVEL,
                email: self.build_user_tag(sub),
                account: Account::SharedSecret {
                    password: sub.uuid.to_string(),
                },
            })
            .collect()
    }

    /// Ciphered-secret accounts (shadowsocks-like inbounds), shape keyed on
    /// the cipher name.
    ///
    /// 2022-family ciphers take a per-user derived key and go through the
    /// credential validator; a validation failure logs the uid and leaves
    /// that slot `Skipped`. Classic ciphers package the raw password and the
    /// resolved cipher enumeration directly, `Unknown` included — the
    /// validator never runs on that path.
    pub fn build_ciphered_users(
        &self,
        subscribers: &[SubscriberRecord],
        cipher_name: &str,
    ) -> Vec<UserSlot> {
        let modern = self.aead_2022.contains(cipher_name);
        subscribers
            .iter()
            .map(|sub| {
                if modern {
                    self.build_aead_2022_slot(sub, cipher_name)
                } else {
                    UserSlot::Built(EngineUser {
                        level: USER_LEVEL,
                        email: self.build_user_tag(sub),
                        account: Account::Classic {
                            password: sub.passwd.clone(),
                            cipher: CipherKind::resolve(cipher_name),
                        },
                    })
                }
            })
            .collect()
    }

    fn build_aead_2022_slot(&self, sub: &SubscriberRecord, cipher_name: &str) -> UserSlot {
        let email = self.build_user_tag(sub);
        match self.validator.validate(&sub.passwd, cipher_name) {
            Ok(key) => UserSlot::Built(EngineUser {
                level: USER_LEVEL,
                email: email.clone(),
                account: Account::Aead2022 {
                    key,
                    email,
                    level: USER_LEVEL,
                },
            }),
            Err(err) => {
                error!(uid = sub.uid, %err, "skipping subscriber: key validation failed");
                UserSlot::Skipped {
                    uid: sub.uid,
                    reason: err.to_string(),
                }
            }
        }
    }
}
