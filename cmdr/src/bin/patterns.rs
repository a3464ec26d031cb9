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

//! Draw a triangle or a diamond. Try it with: `printf '2\n5\n' | cargo run --bin patterns`.

use clap::Parser;
use lista_cmdr::{Scanner, ok,
                 patterns::{CLIArg, run_pattern_printer},
                 try_initialize_logging};

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    try_initialize_logging(&cli_arg.global_options)?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let mut scanner = Scanner::stdin();
    let mut stdout = std::io::stdout().lock();
    let request = run_pattern_printer(&mut scanner, &mut stdout, cli_arg.filler)?;

    tracing::debug!(message = "Stop logging...", shape = ?request.shape());
    ok!()
}
