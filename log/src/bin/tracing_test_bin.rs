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

//! Binary under test for the `test_tracing_bin_stderr` test module in
//! `tracing_init.rs`. It installs a `stderr` subscriber at `DEBUG` and logs one message
//! per level. Nothing is written to `stdout`.

use lista_log::{TracingConfig, TracingScope};

fn main() -> miette::Result<()> {
    let default_guard = TracingConfig::new_stderr()
        .with_scope(TracingScope::ThreadLocal)
        .install()?;

    tracing::error!("error");
    tracing::warn!("warn");
    tracing::info!("info");
    tracing::debug!("debug");
    tracing::trace!("trace");

    drop(default_guard);
    Ok(())
}
