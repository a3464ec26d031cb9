/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Ten numbers sorted into evens and odds by position. The `parity` binary drives this
//! through [`run_parity_classifier`].

// Attach sources.
pub mod clap_config;
pub mod launcher;
pub mod parity_slots;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use launcher::*;
pub use parity_slots::*;
