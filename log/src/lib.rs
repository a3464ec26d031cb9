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

//! Tracing setup shared by the `lista` console exercises.
//!
//! The exercises write their results to `stdout`, so log output never goes there. It
//! is written to a file (by default [`DEFAULT_LOG_FILE_NAME`]), to `stderr`, or both.
//! Logging is **disabled** unless one of the `try_initialize_logging_*` functions is
//! called with a level filter other than [`tracing_core::LevelFilter::OFF`].
//!
//! ```no_run
//! use lista_log::{TracingConfig, WriterConfig, try_initialize_logging_global};
//!
//! let config: TracingConfig = tracing_core::LevelFilter::DEBUG.into();
//! let config = config + WriterConfig::StderrAndFile("session.log".to_string()).into();
//! try_initialize_logging_global(config)?;
//! tracing::debug!(message = "Start logging...");
//! # Ok::<(), miette::Report>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod log_support;

// Re-export.
pub use log_support::*;
