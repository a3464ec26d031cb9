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

//! Triangle and diamond shapes drawn with a filler character, one [`PatternRow`] per
//! line. The `patterns` binary drives this through [`run_pattern_printer`].

// Attach sources.
pub mod clap_config;
pub mod diamond;
pub mod launcher;
pub mod pattern_row;
pub mod shape;
pub mod triangle;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use diamond::*;
pub use launcher::*;
pub use pattern_row::*;
pub use shape::*;
pub use triangle::*;

pub const DEFAULT_FILLER: char = '%';
