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

//! Square the even numbers, square root the odd ones, until a number `<= 0` shows up.
//! The `stream` binary drives this through [`run_stream_classifier`].

// Attach sources.
pub mod classification;
pub mod clap_config;
pub mod launcher;

// Re-export.
pub use classification::*;
pub use clap_config::*;
pub use launcher::*;
