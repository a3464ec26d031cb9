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

use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Square of an even number. Computed in 64 bits, so it can't overflow.
    Square(i64),
    /// Square root of an odd number. Displayed with 2 decimals.
    SquareRoot(f64),
}

impl Classification {
    /// Returns `None` for the sentinel, ie any number `<= 0`.
    #[must_use]
    pub fn of(number: i32) -> Option<Self> {
        if number <= 0 {
            return None;
        }
        Some(if number % 2 == 0 {
            let number = i64::from(number);
            Classification::Square(number * number)
        } else {
            Classification::SquareRoot(f64::from(number).sqrt())
        })
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Classification::Square(it) => write!(f, "{it}"),
            Classification::SquareRoot(it) => write!(f, "{it:.2}"),
        }
    }
}
