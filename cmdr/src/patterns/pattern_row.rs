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

use std::io::{self, Write};

/// One line of a shape: some leading spaces, then `filled_width` filler characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRow {
    pub leading_spaces: usize,
    pub filled_width: usize,
}

impl PatternRow {
    /// Clamps negative widths to zero.
    #[must_use]
    pub fn new(leading_spaces: i64, filled_width: i64) -> Self {
        Self {
            leading_spaces: usize::try_from(leading_spaces).unwrap_or(0),
            filled_width: usize::try_from(filled_width).unwrap_or(0),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize { self.leading_spaces + self.filled_width }

    /// The row's text, without a newline.
    #[must_use]
    pub fn render(&self, filler: char) -> String {
        let mut it = String::with_capacity(self.width());
        it.extend(std::iter::repeat_n(' ', self.leading_spaces));
        it.extend(std::iter::repeat_n(filler, self.filled_width));
        it
    }
}

/// Write each row followed by a newline.
///
/// # Errors
///
/// Fails if `out` can't be written to.
pub fn write_rows(
    rows: impl IntoIterator<Item = PatternRow>,
    filler: char,
    out: &mut impl Write,
) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row.render(filler))?;
    }
    Ok(())
}
