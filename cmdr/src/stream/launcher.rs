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

use crate::{ScanOutcome, Scanner, WriteResultExt, stream::Classification};

/// Read numbers (without prompting) and print one [`Classification`] per line, until a
/// number `<= 0` or the end of input. Returns how many lines were printed.
///
/// A token that isn't a number repeats the previous number, or stops the stream if
/// nothing was read yet.
///
/// # Errors
///
/// Fails if the console can't be read from or written to.
pub fn run_stream_classifier(
    scanner: &mut Scanner<impl BufRead>,
    out: &mut impl Write,
) -> miette::Result<usize> {
    let mut number = 0;
    let mut printed = 0;

    loop {
        if scanner.read_into(&mut number)? == ScanOutcome::EndOfInput {
            break;
        }

        let Some(classification) = Classification::of(number) else {
            tracing::debug!(message = "Sentinel", number);
            break;
        };

        writeln!(out, "{classification}").or_write_error()?;
        printed += 1;
    }

    out.flush().or_write_error()?;
    Ok(printed)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn run(input: &str) -> (usize, String) {
        let mut scanner = Scanner::new(Cursor::new(input.as_bytes()));
        let mut out = Vec::new();
        let printed = run_stream_classifier(&mut scanner, &mut out).unwrap();
        (printed, String::from_utf8(out).unwrap())
    }

    #[test_case("4\n3\n0\n", "16\n1.73\n" ; "stops at zero")]
    #[test_case("4 3 -1 8", "16\n1.73\n" ; "stops at negative and ignores the rest")]
    #[test_case("2 5", "4\n2.24\n" ; "stops at end of input")]
    #[test_case("0", "" ; "sentinel first")]
    #[test_case("", "" ; "empty input")]
    #[test_case("x 4", "" ; "malformed first number is the sentinel")]
    #[test_case("6 x 0", "36\n36\n" ; "malformed number repeats the previous one")]
    fn test_stream(input: &str, expected: &str) {
        let (printed, output) = run(input);
        assert_eq2!(output, expected);
        assert_eq2!(printed, expected.lines().count());
    }

    #[test]
    fn test_invalid_utf8_repeats_the_previous_number() {
        let mut scanner = Scanner::new(Cursor::new(&b"4\n\xe9\n3\n0\n"[..]));
        let mut out = Vec::new();

        let printed = run_stream_classifier(&mut scanner, &mut out).unwrap();

        assert_eq2!(String::from_utf8(out).unwrap(), "16\n16\n1.73\n");
        assert_eq2!(printed, 3);
    }
}
