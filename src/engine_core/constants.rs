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

//! relay-warden constants - single source of truth for configuration values.

/// Environment variable names read by [`crate::config::Config::from_env`].
pub mod config {
    pub const ENV_LOG_LEVEL: &str = "RELAY_WARDEN_LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "RELAY_WARDEN_LOG_FORMAT";
    pub const ENV_INBOUND_TAG: &str = "RELAY_WARDEN_INBOUND_TAG";
    pub const ENV_PROTOCOL: &str = "RELAY_WARDEN_PROTOCOL";
    pub const ENV_CIPHER: &str = "RELAY_WARDEN_CIPHER";
}

/// Provisioning constants shared by the builders.
pub mod provision {
    /// Priority level every user is provisioned at.
    pub const USER_LEVEL: u8 = 0;

    /// Separator in the `tag|email|uid` identity tag.
    pub const TAG_SEPARATOR: char = '|';
}
