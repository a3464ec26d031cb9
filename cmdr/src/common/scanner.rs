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

//! Integer input in the style of `scanf("%d", &slot)`, which decides how the exercises
//! react to sloppy input:
//!
//! - Whitespace (including newlines and vertical tabs) before a number is skipped.
//! - An optional sign and a run of digits is read. Whatever follows the digits in the
//!   same token stays pending for the next read, eg: `12abc` reads `12`, then `abc`.
//! - When there are no digits, the slot keeps the value it already held. Unlike
//!   `scanf`, the offending token is consumed, so read loops always make progress.
//! - Bytes that aren't valid UTF-8 are decoded as `U+FFFD`, so they form a malformed
//!   token like any other non-numeric text.
//! - At the end of input the slot keeps its value too.

use std::io::{self, BufRead, StdinLock};

use crate::ConsoleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A number was read and stored in the slot.
    Matched,
    /// The next token is not a number (or does not fit in an `i32`). The slot is
    /// untouched.
    Mismatch { token: String },
    /// There is nothing left to read. The slot is untouched.
    EndOfInput,
}

/// Reads whitespace separated integers from any [`BufRead`]. Tests use a
/// [`std::io::Cursor`], the binaries use [`Scanner::stdin`].
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    raw_line: Vec<u8>,
    line: String,
    cursor: usize,
}

impl Scanner<StdinLock<'static>> {
    #[must_use]
    pub fn stdin() -> Self { Self::new(io::stdin().lock()) }
}

impl<R: BufRead> Scanner<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw_line: Vec::new(),
            line: String::new(),
            cursor: 0,
        }
    }

    /// Read the next integer into `slot`. See the [module docs](self) for what happens
    /// to `slot` when there is no integer to read.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the underlying reader fails.
    pub fn read_into(&mut self, slot: &mut i32) -> miette::Result<ScanOutcome> {
        if !self.skip_to_next_token()? {
            tracing::debug!(message = "End of input", held = *slot);
            return Ok(ScanOutcome::EndOfInput);
        }

        let rest = &self.line[self.cursor..];
        let token_len = rest.bytes().position(is_space).unwrap_or(rest.len());
        let token = &rest[..token_len];
        let sign_len = usize::from(token.starts_with(['+', '-']));
        let digits_len = token[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        if digits_len > 0 {
            let number_len = sign_len + digits_len;
            if let Ok(number) = token[..number_len].parse::<i32>() {
                *slot = number;
                self.cursor += number_len;
                tracing::debug!(message = "Scanned", number);
                return Ok(ScanOutcome::Matched);
            }
        }

        let token = token.to_string();
        self.cursor += token_len;
        // % is Display, ? is Debug.
        tracing::warn!(message = "Ignoring malformed number", token = %token, held = *slot);
        Ok(ScanOutcome::Mismatch { token })
    }

    /// Advance past whitespace, reading more lines as needed. Returns `false` at the
    /// end of input.
    fn skip_to_next_token(&mut self) -> miette::Result<bool> {
        loop {
            let skipped = self.line[self.cursor..]
                .bytes()
                .take_while(|it| is_space(*it))
                .count();
            self.cursor += skipped;

            if self.cursor < self.line.len() {
                return Ok(true);
            }

            self.raw_line.clear();
            self.cursor = 0;
            let bytes_read = self
                .reader
                .read_until(b'\n', &mut self.raw_line)
                .map_err(ConsoleError::read)?;
            if bytes_read == 0 {
                self.line.clear();
                return Ok(false);
            }
            self.line = String::from_utf8_lossy(&self.raw_line).into_owned();
        }
    }
}

/// The bytes C's `isspace` accepts. [`u8::is_ascii_whitespace`] leaves out `\v`.
fn is_space(it: u8) -> bool { it.is_ascii_whitespace() || it == b'\x0B' }

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn scanner(input: &str) -> Scanner<Cursor<&[u8]>> {
        Scanner::new(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_numbers_across_lines() {
        let mut it = scanner("  1 2\n\n   3\n");
        let mut slot = 0;

        for expected in [1, 2, 3] {
            assert_eq2!(it.read_into(&mut slot).unwrap(), ScanOutcome::Matched);
            assert_eq2!(slot, expected);
        }
        assert_eq2!(it.read_into(&mut slot).unwrap(), ScanOutcome::EndOfInput);
        assert_eq2!(slot, 3);
    }

    #[test]
    fn test_trailing_garbage_stays_pending() {
        let mut it = scanner("  12abc 7");
        let mut slot = 0;

        assert_eq2!(it.read_into(&mut slot).unwrap(), ScanOutcome::Matched);
        assert_eq2!(slot, 12);

        assert_eq2!(
            it.read_into(&mut slot).unwrap(),
            ScanOutcome::Mismatch {
                token: "abc".to_string()
            }
        );
        assert_eq2!(slot, 12);

        assert_eq2!(it.read_into(&mut slot).unwrap(), ScanOutcome::Matched);
        assert_eq2!(slot, 7);
    }

    #[test_case("-42", -42 ; "negative")]
    #[test_case("+8", 8 ; "explicit plus sign")]
    #[test_case("007", 7 ; "leading zeros")]
    #[test_case("2147483647", i32::MAX ; "largest i32")]
    fn test_signed_numbers(input: &str, expected: i32) {
        let mut slot = 0;
        assert_eq2!(scanner(input).read_into(&mut slot).unwrap(), ScanOutcome::Matched);
        assert_eq2!(slot, expected);
    }

    #[test_case("abc" ; "letters")]
    #[test_case("-" ; "lone sign")]
    #[test_case("99999999999" ; "overflow")]
    #[test_case("é1" ; "non ascii prefix")]
    fn test_mismatch_keeps_held_value(input: &str) {
        let mut it = scanner(input);
        let mut slot = 5;
        assert_eq2!(
            it.read_into(&mut slot).unwrap(),
            ScanOutcome::Mismatch {
                token: input.to_string()
            }
        );
        assert_eq2!(slot, 5);
        assert_eq2!(it.read_into(&mut slot).unwrap(), ScanOutcome::EndOfInput);
    }

    #[test]
    fn test_invalid_utf8_is_a_mismatch() {
        let mut it = Scanner::new(Cursor::new(&b"\xff\xfe 7\n"[..]));
        let mut slot = 5;

        assert_eq2!(
            it.read_into(&mut slot).unwrap(),
            ScanOutcome::Mismatch {
                token: "\u{FFFD}\u{FFFD}".to_string()
            }
        );
        assert_eq2!(slot, 5);

        assert_eq2!(it.read_into(&mut slot).unwrap(), ScanOutcome::Matched);
        assert_eq2!(slot, 7);
    }

    #[test]
    fn test_vertical_tab_separates_numbers() {
        let mut it = scanner("1\x0B2\x0B\n");
        let mut slot = 0;

        for expected in [1, 2] {
            assert_eq2!(it.read_into(&mut slot).unwrap(), ScanOutcome::Matched);
            assert_eq2!(slot, expected);
        }
        assert_eq2!(it.read_into(&mut slot).unwrap(), ScanOutcome::EndOfInput);
    }

    #[test]
    fn test_empty_input() {
        let mut slot = -1;
        assert_eq2!(scanner("").read_into(&mut slot).unwrap(), ScanOutcome::EndOfInput);
        assert_eq2!(scanner(" \n\t\n").read_into(&mut slot).unwrap(), ScanOutcome::EndOfInput);
        assert_eq2!(slot, -1);
    }
}
