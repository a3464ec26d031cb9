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

use crate::GlobalOption;

#[derive(Debug, Parser)]
#[command(bin_name = "mode")]
#[command(
    about = "Read a count, then that many numbers from stdin, tracking the biggest one and how often it shows up."
)]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'r',
        help = "Print the biggest number and its occurrence count when done"
    )]
    pub report: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_opt_in() {
        assert!(!CLIArg::try_parse_from(["mode"]).unwrap().report);
        assert!(CLIArg::try_parse_from(["mode", "-r"]).unwrap().report);
    }
}
