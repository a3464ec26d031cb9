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

use tracing::dispatcher;

use crate::{TracingConfig, TracingScope};

/// Install a global subscriber, which once set can't be unset or changed. This is what
/// the exercise binaries use.
///
/// Logging is **DISABLED** by **default**: nothing is installed when the level filter is
/// [`tracing_core::LevelFilter::OFF`], and the [`tracing::debug!`] etc. macros are then
/// no-ops.
///
/// # Errors
///
/// Fails if the log file can't be created, or if a global subscriber was already set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let config = options.into().with_scope(TracingScope::Global);

    if config.get_level_filter() == tracing_core::LevelFilter::OFF {
        return Ok(());
    }

    config.install().map(|_| ())
}

/// Install a subscriber for the current thread only, until the returned guard is
/// dropped. This is what tests use, since each test can pick its own writer.
///
/// Returns `None` when the level filter is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Fails if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let config = options.into().with_scope(TracingScope::ThreadLocal);

    if config.get_level_filter() == tracing_core::LevelFilter::OFF {
        return Ok(None);
    }

    config.install()
}
