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

pub const NUMBER_PROMPT: &str = "Insira o número: ";

/// No newline at the end, and none between this and [`odd_average_msg`].
#[must_use]
pub fn even_count_msg(even_count: usize) -> String { format!("{even_count} valoeres pares.") }

#[must_use]
pub fn odd_average_msg(odd_average: f64) -> String {
    format!("A média dos ímpares é {odd_average:.2}")
}
