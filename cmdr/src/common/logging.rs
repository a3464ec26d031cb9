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

use lista_log::{DEFAULT_LOG_FILE_NAME, TracingConfig, try_initialize_logging_global};
use tracing_core::LevelFilter;

use crate::GlobalOption;

/// The logging config for an exercise binary. `stdout` belongs to the exercise, so
/// logs only ever go to [`DEFAULT_LOG_FILE_NAME`].
#[must_use]
pub fn tracing_config_from(global_options: &GlobalOption) -> TracingConfig {
    let level_filter = if global_options.enable_logging {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    TracingConfig {
        level_filter,
        ..TracingConfig::new_file(Some(DEFAULT_LOG_FILE_NAME.to_string()))
    }
}

/// Install the global subscriber when `--enable-logging` was passed. Does nothing
/// otherwise.
///
/// # Errors
///
/// Fails if `log.txt` can't be created in the current folder.
pub fn try_initialize_logging(global_options: &GlobalOption) -> miette::Result<()> {
    try_initialize_logging_global(tracing_config_from(global_options))
}
