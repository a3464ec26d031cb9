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

use std::io::Write;

use clap::Parser;
use lista_cmdr::{Scanner, WriteResultExt,
                 mode::{CLIArg, MaxTracker, run_mode_tracker, ui_str},
                 try_initialize_logging};

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    try_initialize_logging(&cli_arg.global_options)?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let mut scanner = Scanner::stdin();
    let mut stdout = std::io::stdout().lock();
    let mut result = MaxTracker::default();
    run_mode_tracker(&mut scanner, &mut stdout, |tracker| result = *tracker)?;

    tracing::debug!(message = "Stop logging...", result = ?result);

    if cli_arg.report {
        write!(stdout, "{}", ui_str::report_msg(&result)).or_write_error()?;
    }
    stdout.flush().or_write_error()
}
