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

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LogSetupError {
    #[error("📑 Can't use '{file_path}' as a log file")]
    #[diagnostic(
        code(lista_log::invalid_log_file_path),
        help("The path needs a file name, and its folder must exist and be writable.")
    )]
    InvalidLogFilePath { file_path: String },

    #[error("🔊 A global tracing subscriber is already installed")]
    #[diagnostic(code(lista_log::subscriber_already_set))]
    SubscriberAlreadySet(#[source] tracing_subscriber::util::TryInitError),
}
