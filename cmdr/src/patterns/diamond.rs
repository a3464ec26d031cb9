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

use crate::{WriteResultExt,
            patterns::{PatternRow, write_rows}};

/// Rows of the "diamond". The widest possible row is `2 * line_count + 1` characters.
///
/// The first row has 1 filler character. After row `i` (1 based) the filled width:
/// - grows by 4 while `line_count / i > 2`,
/// - shrinks by 4 once `line_count / i < 2`,
/// - stays put when `line_count / i == 2` exactly.
///
/// The ratio is compared exactly (as `line_count` vs `2 * i`), with no integer
/// truncation. The shape is only symmetric for some line counts, eg: 4 lines give
/// `1, 5, 5, 1` and 6 lines give `1, 5, 9, 9, 5, 1`, but 2 lines give `1, 1`.
///
/// Each row is indented by `(total_width - filled_width) / 2 + 1` spaces. Both widths
/// are odd so the division is exact.
#[must_use]
pub fn diamond_rows(line_count: i32) -> DiamondRows {
    DiamondRows {
        line_count: i64::from(line_count),
        row_index: 1,
        filled_width: 1,
    }
}

/// Iterator returned by [`diamond_rows`].
#[derive(Debug, Clone)]
pub struct DiamondRows {
    line_count: i64,
    row_index: i64,
    filled_width: i64,
}

impl DiamondRows {
    fn total_width(&self) -> i64 { 2 * self.line_count + 1 }
}

impl Iterator for DiamondRows {
    type Item = PatternRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row_index > self.line_count {
            return None;
        }

        let leading_spaces = (self.total_width() - self.filled_width) / 2 + 1;
        let row = PatternRow::new(leading_spaces, self.filled_width);

        match self.line_count.cmp(&(2 * self.row_index)) {
            std::cmp::Ordering::Greater => self.filled_width += 4,
            std::cmp::Ordering::Less => self.filled_width -= 4,
            std::cmp::Ordering::Equal => {}
        }
        self.row_index += 1;

        Some(row)
    }
}

/// # Errors
///
/// Fails if `out` can't be written to.
pub fn render_diamond(
    line_count: i32,
    filler: char,
    out: &mut impl Write,
) -> miette::Result<()> {
    write_rows(diamond_rows(line_count), filler, out).or_write_error()
}
