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
#[command(bin_name = "stream")]
#[command(
    about = "Read numbers from stdin until one is <= 0.\nEven numbers are squared, odd numbers are square rooted."
)]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}
