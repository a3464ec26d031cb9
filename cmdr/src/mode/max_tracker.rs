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

/// Starts at a maximum of `0` seen `0` times. So negative numbers never register, and
/// a `0` counts as another occurrence of the starting maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxTracker {
    pub max: i32,
    pub occurrences: u32,
}

impl MaxTracker {
    /// A strictly bigger number becomes the new maximum, seen once. An equal number
    /// bumps the occurrence count. Smaller numbers are ignored.
    pub fn observe(&mut self, number: i32) {
        match number.cmp(&self.max) {
            std::cmp::Ordering::Greater => {
                self.max = number;
                self.occurrences = 1;
            }
            std::cmp::Ordering::Equal => self.occurrences += 1,
            std::cmp::Ordering::Less => {}
        }
    }
}
