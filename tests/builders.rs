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

//! Integration tests for the per-protocol user builders and the engine seam.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use uuid::Uuid;

use relay_warden::config::{Config, InboundProtocol};
use relay_warden::controller::{Controller, KeyLengthValidator};
use relay_warden::engine_core::accounts::{Account, CipherKind, EngineUser, SecurityNegotiation};
use relay_warden::engine_core::errors::{ProvisionError, ValidationError};
use relay_warden::engine_core::models::{SubscriberRecord, UserSlot};
use relay_warden::engine_core::traits::{SecretValidator, UserManager};
use relay_warden::engine_core::types::DerivedKey;

fn subscriber(uid: i64) -> SubscriberRecord {
    SubscriberRecord {
        uid,
        email: format!("user{uid}@example.com"),
        uuid: Uuid::new_v4(),
        passwd: format!("pw-{uid}"),
    }
}

fn batch(n: i64) -> Vec<SubscriberRecord> {
    (1..=n).map(subscriber).collect()
}

fn controller(protocol: InboundProtocol, cipher: &str) -> Controller {
    let config = Config {
        inbound_tag: "listener1".to_string(),
        protocol,
        cipher: cipher.to_string(),
        ..Config::default()
    };
    Controller::new(Arc::new(config))
}

/// Rejects exactly one secret; everything else passes through.
struct RejectSecret(String);

impl SecretValidator for RejectSecret {
    fn validate(&self, secret: &str, _cipher_name: &str) -> Result<DerivedKey, ValidationError> {
        if secret == self.0 {
            Err(ValidationError::Rejected("bad key".to_string()))
        } else {
            Ok(DerivedKey::new(secret.to_string()))
        }
    }
}

/// Fails everything; proves the classic path never consults the validator.
struct RejectAll;

impl SecretValidator for RejectAll {
    fn validate(&self, _secret: &str, _cipher_name: &str) -> Result<DerivedKey, ValidationError> {
        Err(ValidationError::Rejected("always".to_string()))
    }
}

#[test]
fn identity_builder_populates_every_slot() {
    let controller = controller(InboundProtocol::Vmess, "aes-128-gcm");
    let subs = batch(5);
    let users = controller.build_identity_users(&subs);

    assert_eq!(users.len(), subs.len());
    for (user, sub) in users.iter().zip(&subs) {
        assert_eq!(user.level, 0);
        assert_eq!(
            user.email,
            format!("listener1|{}|{}", sub.email, sub.uid)
        );
        match &user.account {
            Account::Identity { id, security } => {
                assert_eq!(*id, sub.uuid);
                assert_eq!(*security, SecurityNegotiation::Auto);
            }
            other => panic!("expected identity account, got {other:?}"),
        }
    }
}

#[test]
fn shared_secret_builder_forwards_uuid_verbatim() {
    let controller = controller(InboundProtocol::Trojan, "aes-128-gcm");
    let subs = batch(3);
    let users = controller.build_shared_secret_users(&subs);

    assert_eq!(users.len(), subs.len());
    for (user, sub) in users.iter().zip(&subs) {
        match &user.account {
            Account::SharedSecret { password } => {
                assert_eq!(*password, sub.uuid.to_string());
            }
            other => panic!("expected shared-secret account, got {other:?}"),
        }
    }
}

#[test]
fn classic_cipher_packages_raw_password_and_enum() {
    let controller =
        controller(InboundProtocol::Shadowsocks, "aes-256-gcm").with_validator(Arc::new(RejectAll));
    let subs = batch(3);
    let slots = controller.build_ciphered_users(&subs, "aes-256-gcm");

    // RejectAll never ran: the classic path has no validation step.
    assert_eq!(slots.len(), 3);
    for (slot, sub) in slots.iter().zip(&subs) {
        let user = slot.as_built().expect("classic path is total");
        match &user.account {
            Account::Classic { password, cipher } => {
                assert_eq!(*password, sub.passwd);
                assert_eq!(*cipher, CipherKind::Aes256Gcm);
            }
            other => panic!("expected classic account, got {other:?}"),
        }
    }
}

#[test]
fn unknown_cipher_is_forwarded_not_rejected() {
    let controller = controller(InboundProtocol::Shadowsocks, "totally-made-up");
    let slots = controller.build_ciphered_users(&batch(2), "totally-made-up");

    assert_eq!(slots.len(), 2);
    for slot in &slots {
        let user = slot.as_built().expect("unknown cipher still builds");
        match &user.account {
            Account::Classic { cipher, .. } => assert_eq!(*cipher, CipherKind::Unknown),
            other => panic!("expected classic account, got {other:?}"),
        }
    }
}

#[test]
fn modern_cipher_failure_skips_only_the_bad_slot() {
    let subs = batch(3);
    let controller = controller(InboundProtocol::Shadowsocks, "2022-blake3-aes-256-gcm")
        .with_validator(Arc::new(RejectSecret(subs[1].passwd.clone())));

    let slots = controller.build_ciphered_users(&subs, "2022-blake3-aes-256-gcm");

    assert_eq!(slots.len(), 3);
    assert!(slots[0].as_built().is_some());
    assert!(slots[2].as_built().is_some());
    match &slots[1] {
        UserSlot::Skipped { uid, reason } => {
            assert_eq!(*uid, subs[1].uid);
            assert!(reason.contains("bad key"));
        }
        other => panic!("expected skipped slot, got {other:?}"),
    }
}

#[test]
fn modern_cipher_builds_aead_2022_shape() {
    let controller = controller(InboundProtocol::Shadowsocks, "2022-blake3-aes-128-gcm");
    let subs = batch(2);
    let slots = controller.build_ciphered_users(&subs, "2022-blake3-aes-128-gcm");

    for (slot, sub) in slots.iter().zip(&subs) {
        let user = slot.as_built().expect("pass-through validator accepts all");
        match &user.account {
            Account::Aead2022 { key, email, level } => {
                assert_eq!(key.as_str(), sub.passwd);
                assert_eq!(*email, user.email);
                assert_eq!(*level, user.level);
            }
            other => panic!("expected 2022 account, got {other:?}"),
        }
    }
}

#[test]
fn key_length_validator_gates_the_modern_path() {
    let mut subs = batch(3);
    subs[0].passwd = STANDARD.encode([1u8; 32]);
    subs[1].passwd = "too-short".to_string();
    subs[2].passwd = STANDARD.encode([2u8; 32]);

    let controller = controller(InboundProtocol::Shadowsocks, "2022-blake3-aes-256-gcm")
        .with_validator(Arc::new(KeyLengthValidator));
    let slots = controller.build_ciphered_users(&subs, "2022-blake3-aes-256-gcm");

    assert!(slots[0].as_built().is_some());
    assert!(slots[1].is_skipped());
    assert!(slots[2].as_built().is_some());
}

#[test]
fn builders_are_deterministic() {
    let subs = batch(4);
    for (protocol, cipher) in [
        (InboundProtocol::Vmess, "aes-128-gcm"),
        (InboundProtocol::Trojan, "aes-128-gcm"),
        (InboundProtocol::Shadowsocks, "chacha20-poly1305"),
        (InboundProtocol::Shadowsocks, "2022-blake3-aes-128-gcm"),
    ] {
        let controller = controller(protocol, cipher);
        assert_eq!(controller.build_users(&subs), controller.build_users(&subs));
    }
}

/// Records every add_users call it receives.
#[derive(Default)]
struct RecordingEngine {
    calls: Mutex<Vec<(String, Vec<EngineUser>)>>,
}

#[async_trait]
impl UserManager for RecordingEngine {
    async fn add_users(
        &self,
        inbound_tag: &str,
        users: Vec<EngineUser>,
    ) -> Result<usize, ProvisionError> {
        let count = users.len();
        self.calls
            .lock()
            .unwrap()
            .push((inbound_tag.to_string(), users));
        Ok(count)
    }

    async fn remove_users(
        &self,
        _inbound_tag: &str,
        _emails: Vec<String>,
    ) -> Result<(), ProvisionError> {
        Ok(())
    }
}

#[tokio::test]
async fn provision_hands_dense_set_to_engine() {
    let subs = batch(3);
    let controller = controller(InboundProtocol::Shadowsocks, "2022-blake3-aes-256-gcm")
        .with_validator(Arc::new(RejectSecret(subs[1].passwd.clone())));
    let engine = RecordingEngine::default();

    let accepted = controller.provision(&engine, &subs).await.unwrap();

    assert_eq!(accepted, 2);
    let calls = engine.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (tag, users) = &calls[0];
    assert_eq!(tag, "listener1");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, format!("listener1|{}|1", subs[0].email));
    assert_eq!(users[1].email, format!("listener1|{}|3", subs[2].email));
}

#[tokio::test]
async fn provision_surfaces_engine_errors() {
    struct BrokenEngine;

    #[async_trait]
    impl UserManager for BrokenEngine {
        async fn add_users(
            &self,
            inbound_tag: &str,
            _users: Vec<EngineUser>,
        ) -> Result<usize, ProvisionError> {
            Err(ProvisionError::UnknownInbound(inbound_tag.to_string()))
        }

        async fn remove_users(
            &self,
            _inbound_tag: &str,
            _emails: Vec<String>,
        ) -> Result<(), ProvisionError> {
            Ok(())
        }
    }

    let controller = controller(InboundProtocol::Vmess, "aes-128-gcm");
    let err = controller.provision(&BrokenEngine, &batch(1)).await.unwrap_err();
    assert!(matches!(err, ProvisionError::UnknownInbound(tag) if tag == "listener1"));
}
