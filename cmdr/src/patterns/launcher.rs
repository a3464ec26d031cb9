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

use std::io::{BufRead, Write};

use crate::{Scanner, WriteResultExt, patterns::{Shape, ui_str}};

/// What the user asked for, as read from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternRequest {
    pub option: i32,
    pub line_count: i32,
}

impl PatternRequest {
    #[must_use]
    pub fn shape(&self) -> Option<Shape> { Shape::from_menu_option(self.option) }
}

/// Show the banner and menu, read the menu option and the number of lines, then draw
/// the chosen shape once. An unknown option prints [`ui_str::INVALID_OPTION`]. The line
/// count is asked for even when the option is unknown. There is no retry.
///
/// Values that can't be read stay at `0`, which is an invalid option and an empty
/// shape.
///
/// # Errors
///
/// Fails if the console can't be read from or written to.
pub fn run_pattern_printer(
    scanner: &mut Scanner<impl BufRead>,
    out: &mut impl Write,
    filler: char,
) -> miette::Result<PatternRequest> {
    let mut request = PatternRequest::default();

    write!(out, "{}{}", ui_str::BANNER, ui_str::MENU).or_write_error()?;
    out.flush().or_write_error()?;
    scanner.read_into(&mut request.option)?;

    write!(out, "{}", ui_str::LINE_COUNT_PROMPT).or_write_error()?;
    out.flush().or_write_error()?;
    scanner.read_into(&mut request.line_count)?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Pattern requested", request = ?request);

    match request.shape() {
        Some(shape) => {
            writeln!(out).or_write_error()?;
            shape.render(request.line_count, filler, out)?;
        }
        None => {
            write!(out, "{}", ui_str::INVALID_OPTION).or_write_error()?;
        }
    }

    out.flush().or_write_error()?;
    Ok(request)
}
