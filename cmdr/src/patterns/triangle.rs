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

/// Rows of the triangle. Row `i` (1 based) has `2i - 1` filler characters, padded on
/// the left to the width of the widest row, `2 * line_count - 1`. No rows when
/// `line_count <= 0`.
pub fn triangle_rows(line_count: i32) -> impl Iterator<Item = PatternRow> {
    let line_count = i64::from(line_count);
    let total_width = 2 * line_count - 1;
    (1..=line_count).map(move |row_index| {
        let filled_width = 2 * row_index - 1;
        PatternRow::new(total_width - filled_width, filled_width)
    })
}

/// # Errors
///
/// Fails if `out` can't be written to.
pub fn render_triangle(
    line_count: i32,
    filler: char,
    out: &mut impl Write,
) -> miette::Result<()> {
    write_rows(triangle_rows(line_count), filler, out).or_write_error()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_three_lines() {
        let mut out = Vec::new();
        render_triangle(3, '%', &mut out).unwrap();
        assert_eq2!(String::from_utf8(out).unwrap(), "    %\n  %%%\n%%%%%\n");
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(7)]
    #[test_case(40)]
    fn test_row_widths(line_count: i32) {
        let rows: Vec<_> = triangle_rows(line_count).collect();
        let expected_width = usize::try_from(2 * line_count - 1).unwrap();

        assert_eq2!(rows.len(), usize::try_from(line_count).unwrap());
        for (index, row) in rows.iter().enumerate() {
            assert_eq2!(row.filled_width, 2 * (index + 1) - 1);
            assert_eq2!(row.width(), expected_width);
        }
    }

    #[test_case(0)]
    #[test_case(-4)]
    fn test_no_rows_for_non_positive_line_count(line_count: i32) {
        assert_eq2!(triangle_rows(line_count).count(), 0);
    }
}
