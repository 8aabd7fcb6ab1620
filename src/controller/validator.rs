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

//! Credential validators for 2022-family keys.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::engine_core::errors::ValidationError;
use crate::engine_core::traits::SecretValidator;
use crate::engine_core::types::DerivedKey;

/// Accepts every secret and echoes it unchanged.
///
/// The default: bad keys surface as runtime rejections inside the engine,
/// not here.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughValidator;

impl SecretValidator for PassthroughValidator {
    fn validate(&self, secret: &str, _cipher_name: &str) -> Result<DerivedKey, ValidationError> {
        Ok(DerivedKey::new(secret.to_string()))
    }
}

/// Checks that the secret base64-decodes to the key length the cipher wants.
///
/// 2022 keys are generated as `openssl rand -base64 32` (16 bytes for the
/// aes-128 variant). Not wired in by default; substitute it via
/// `Controller::with_validator`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyLengthValidator;

impl KeyLengthValidator {
    fn expected_len(cipher_name: &str) -> usize {
        if cipher_name.to_lowercase().contains("aes-128") {
            16
        } else {
            32
        }
    }
}

impl SecretValidator for KeyLengthValidator {
    fn validate(&self, secret: &str, cipher_name: &str) -> Result<DerivedKey, ValidationError> {
        let decoded = STANDARD
            .decode(secret)
            .map_err(|e| ValidationError::MalformedKey(e.to_string()))?;
        let expected = Self::expected_len(cipher_name);
        if decoded.len() != expected {
            return Err(ValidationError::KeyLength {
                cipher: cipher_name.to_string(),
                expected,
                actual: decoded.len(),
            });
        }
        Ok(DerivedKey::new(secret.to_string()))
    }
}
