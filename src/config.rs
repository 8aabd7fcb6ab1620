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

use serde::{Deserialize, Serialize};
use std::env;

use crate::engine_core::constants::config as env_keys;

/// Inbound protocol families the controller can provision for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum InboundProtocol {
    Vmess,
    Trojan,
    Shadowsocks,
}

impl InboundProtocol {
    pub fn parse_safe(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "vmess" | "v2ray" => InboundProtocol::Vmess,
            "trojan" => InboundProtocol::Trojan,
            "shadowsocks" | "ss" => InboundProtocol::Shadowsocks,
            _ => InboundProtocol::Vmess,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub log_format: String, // "json" or "text"
    /// Tag of the inbound listener this controller provisions.
    pub inbound_tag: String,
    pub protocol: InboundProtocol,
    /// Requested cipher name; read by the ciphered-secret builder only.
    pub cipher: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_level: env::var(env_keys::ENV_LOG_LEVEL).unwrap_or_else(|_| "info".to_string()),
            log_format: env::var(env_keys::ENV_LOG_FORMAT).unwrap_or_else(|_| "text".to_string()),
            inbound_tag: env::var(env_keys::ENV_INBOUND_TAG)
                .unwrap_or_else(|_| "inbound0".to_string()),
            protocol: InboundProtocol::parse_safe(
                &env::var(env_keys::ENV_PROTOCOL).unwrap_or_else(|_| "vmess".to_string()),
            ),
            cipher: env::var(env_keys::ENV_CIPHER).unwrap_or_else(|_| "aes-128-gcm".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            inbound_tag: "inbound0".to_string(),
            protocol: InboundProtocol::Vmess,
            cipher: "aes-128-gcm".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_parse_is_case_insensitive_and_defaulted() {
        assert_eq!(InboundProtocol::parse_safe("Trojan"), InboundProtocol::Trojan);
        assert_eq!(InboundProtocol::parse_safe("SS"), InboundProtocol::Shadowsocks);
        assert_eq!(InboundProtocol::parse_safe("nonsense"), InboundProtocol::Vmess);
    }
}
