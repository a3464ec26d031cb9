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
            parity::{PARITY_SLOT_COUNT, ParitySlots, ui_str}};

/// Prompt for and read [`PARITY_SLOT_COUNT`] numbers, slot them, then print the count
/// of evens and the average of the odd slots back to back.
///
/// A number that can't be read is replaced by the previous one (`0` for the first).
///
/// # Errors
///
/// Fails if the console can't be read from or written to.
pub fn run_parity_classifier(
    scanner: &mut Scanner<impl BufRead>,
    out: &mut impl Write,
) -> miette::Result<ParitySlots> {
    let mut slots = ParitySlots::default();
    let mut number = 0;

    for index in 0..usize::from(PARITY_SLOT_COUNT) {
        write!(out, "{}", ui_str::NUMBER_PROMPT).or_write_error()?;
        out.flush().or_write_error()?;
        scanner.read_into(&mut number)?;

        let parity = slots.place(index, number);
        // % is Display, ? is Debug.
        tracing::debug!(message = "Placed number", index, number, parity = ?parity);
    }

    write!(
        out,
        "{}{}",
        ui_str::even_count_msg(slots.even_count()),
        ui_str::odd_average_msg(slots.odd_average())
    )
    .or_write_error()?;
    out.flush().or_write_error()?;

    Ok(slots)
}
