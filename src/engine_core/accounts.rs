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

//! Engine-facing account schema.
//!
//! Field names and serde renames in this module are a compatibility contract
//! with the proxy engine's user-management API, not an internal choice.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::engine_core::types::DerivedKey;

/// Security negotiation mode for identity-based accounts.
///
/// This layer always provisions `Auto`; the engine picks the cipher during
/// the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SecurityNegotiation {
    Auto,
}

/// Engine cipher enumeration for classic ciphered accounts.
///
/// `Unknown` is a first-class value, not an error: an unrecognized name is
/// still packaged and forwarded, and rejecting it is the engine's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherKind {
    #[serde(rename = "AES_128_GCM")]
    Aes128Gcm,
    #[serde(rename = "AES_256_GCM")]
    Aes256Gcm,
    #[serde(rename = "CHACHA20_POLY1305")]
    Chacha20Poly1305,
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl CipherKind {
    /// Normalize a cipher name to the engine enumeration.
    ///
    /// Case-insensitive, recognizes both the short and the IANA-style
    /// aliases. This table is the single source of truth for cipher-name
    /// normalization; keep it exhaustive as engine support grows.
    pub fn resolve(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "aes-128-gcm" | "aead_aes_128_gcm" => CipherKind::Aes128Gcm,
            "aes-256-gcm" | "aead_aes_256_gcm" => CipherKind::Aes256Gcm,
            "chacha20-poly1305" | "aead_chacha20_poly1305" | "chacha20-ietf-poly1305" => {
                CipherKind::Chacha20Poly1305
            }
            "none" | "plain" => CipherKind::None,
            _ => CipherKind::Unknown,
        }
    }
}

/// The modern-AEAD ("2022") cipher family.
///
/// Membership decides which account shape the ciphered-secret builder emits.
/// The list tracks the engine's evolving support, so it is held as data:
/// `Default` carries the names the engine supports today and deployments can
/// supply their own via [`Aead2022Family::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aead2022Family {
    names: HashSet<String>,
}

impl Aead2022Family {
    pub const DEFAULT_NAMES: [&'static str; 3] = [
        "2022-blake3-aes-128-gcm",
        "2022-blake3-aes-256-gcm",
        "2022-blake3-chacha20-poly1305",
    ];

    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.into().to_lowercase())
                .collect(),
        }
    }

    /// Case-folded membership test.
    pub fn contains(&self, cipher_name: &str) -> bool {
        self.names.contains(&cipher_name.to_lowercase())
    }
}

impl Default for Aead2022Family {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMES)
    }
}

/// One engine-ready user credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineUser {
    /// Priority level; always 0 from this layer.
    pub level: u8,
    /// Identity tag (`tag|email|uid`), the engine's per-user accounting key.
    pub email: String,
    pub account: Account,
}

/// Protocol-dependent account payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Account {
    /// Identity-based auth (vmess-like); security is engine-negotiated.
    Identity {
        id: Uuid,
        security: SecurityNegotiation,
    },
    /// Raw shared secret (trojan-like).
    SharedSecret { password: String },
    /// Modern-AEAD ("2022") shape: derived key plus echoed tag and level.
    Aead2022 {
        key: DerivedKey,
        email: String,
        level: u8,
    },
    /// Classic ciphered shape: raw password plus resolved cipher enumeration.
    Classic {
        password: String,
        cipher: CipherKind,
    },
}
