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

//! Process-wide logging initialization.
//!
//! Validation failures from the builders are emitted through this sink at
//! error severity, tagged with the offending subscriber's uid.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global tracing subscriber from the controller config.
///
/// Later calls are no-ops; tests and embedding hosts may install their own
/// subscriber first.
pub fn init(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    // Already-set subscriber is fine.
    let _ = result;
}
