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

//! # lista
//!
//! Four small console exercises, each shipped as its own binary:
//!
//! | Binary     | What it does                                                          |
//! | ---------- | --------------------------------------------------------------------- |
//! | `patterns` | Prints a triangle or a diamond of `%` for a given number of lines.    |
//! | `parity`   | Reads ten numbers, counts the evens and averages the odd slots.       |
//! | `stream`   | Squares even numbers and square roots odd ones, until a number `<= 0`. |
//! | `mode`     | Tracks the biggest number read and how many times it showed up.       |
//!
//! All of them read whitespace separated integers from `stdin` with a
//! [`Scanner`](common::Scanner), which reads like `scanf("%d", ..)`: a malformed
//! token leaves the target value untouched and the program carries on with it.
//!
//! Every binary accepts `-l` / `--enable-logging`, which writes a debug log to
//! `log.txt` in the current folder. Output on `stdout` is unaffected.
//!
//! ```bash
//! printf '1\n4\n' | cargo run --bin patterns
//! printf '4 3 0' | cargo run --bin stream
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod mode;
pub mod parity;
pub mod patterns;
pub mod stream;

// Re-export.
pub use common::*;
