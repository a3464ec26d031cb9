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

use crate::{Scanner, WriteResultExt,
            mode::{MaxTracker, ui_str}};

/// Prompt for a repetition count, then for that many numbers, feeding each one to a
/// [`MaxTracker`]. Nothing but the prompts is written. The final tracker is handed to
/// `on_finish`, which is how callers get at the result.
///
/// A number that can't be read is replaced by the previous one (`0` for the first). A
/// repetition count `<= 0` reads no numbers.
///
/// # Errors
///
/// Fails if the console can't be read from or written to.
pub fn run_mode_tracker(
    scanner: &mut Scanner<impl BufRead>,
    out: &mut impl Write,
    on_finish: impl FnOnce(&MaxTracker),
) -> miette::Result<()> {
    let mut repetitions = 0;
    write!(out, "{}", ui_str::REPETITIONS_PROMPT).or_write_error()?;
    out.flush().or_write_error()?;
    scanner.read_into(&mut repetitions)?;

    let mut tracker = MaxTracker::default();
    let mut number = 0;

    for _ in 0..repetitions {
        write!(out, "{}", ui_str::NUMBER_PROMPT).or_write_error()?;
        out.flush().or_write_error()?;
        scanner.read_into(&mut number)?;
        tracker.observe(number);
    }

    // % is Display, ? is Debug.
    tracing::debug!(message = "Tracking done", repetitions, tracker = ?tracker);
    on_finish(&tracker);
    Ok(())
}
