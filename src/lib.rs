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

//! relay-warden: subscriber-to-engine credential translation.
//!
//! This library provides the user-provisioning controller of a proxy node
//! agent. It turns batches of generic subscriber records into the
//! protocol-specific account objects the proxy engine's user-management API
//! accepts, one inbound listener at a time. The engine itself (connection
//! handling, encryption, relay) sits behind the [`engine_core::traits::UserManager`]
//! seam and is not part of this crate.

pub mod config;
pub mod controller;
pub mod engine_core;
pub mod utils;
