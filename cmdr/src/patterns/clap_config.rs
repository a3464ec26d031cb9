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

use clap::Parser;

use crate::{GlobalOption, patterns::DEFAULT_FILLER};

#[derive(Debug, Parser)]
#[command(bin_name = "patterns")]
#[command(
    about = "Draw a triangle or a diamond in the terminal.\nThe shape and the number of lines are read from stdin."
)]
#[command(version)]
#[command(next_line_help = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(
        long,
        short = 'f',
        default_value_t = DEFAULT_FILLER,
        help = "Character used to draw the body of the shape"
    )]
    pub filler: char,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["patterns"]).unwrap();
        assert_eq2!(cli_arg.filler, '%');
        assert!(!cli_arg.global_options.enable_logging);
    }

    #[test]
    fn test_filler_and_logging() {
        let cli_arg = CLIArg::try_parse_from(["patterns", "-l", "--filler", "#"]).unwrap();
        assert_eq2!(cli_arg.filler, '#');
        assert!(cli_arg.global_options.enable_logging);
    }

    #[test]
    fn test_filler_must_be_one_character() {
        assert!(CLIArg::try_parse_from(["patterns", "-f", "ab"]).is_err());
    }
}
