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

use crate::patterns::{render_diamond, render_triangle};

/// The shapes offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Triangle,
    Diamond,
}

impl Shape {
    /// Menu option `1` is the triangle, `2` the diamond. Anything else is invalid.
    #[must_use]
    pub fn from_menu_option(option: i32) -> Option<Self> {
        match option {
            1 => Some(Shape::Triangle),
            2 => Some(Shape::Diamond),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// Fails if `out` can't be written to.
    pub fn render(
        self,
        line_count: i32,
        filler: char,
        out: &mut impl Write,
    ) -> miette::Result<()> {
        match self {
            Shape::Triangle => render_triangle(line_count, filler, out),
            Shape::Diamond => render_diamond(line_count, filler, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(1, Some(Shape::Triangle))]
    #[test_case(2, Some(Shape::Diamond))]
    #[test_case(0, None)]
    #[test_case(3, None)]
    #[test_case(-1, None)]
    fn test_from_menu_option(option: i32, expected: Option<Shape>) {
        assert_eq2!(Shape::from_menu_option(option), expected);
    }
}
