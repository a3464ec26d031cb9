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
pub enum ConsoleError {
    #[error("⌨️ Could not {action} the console")]
    #[diagnostic(
        code(lista::console::io),
        help("stdin or stdout was closed, or redirected to something unreadable.")
    )]
    Io {
        action: ConsoleAction,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleAction {
    Read,
    Write,
}

impl std::fmt::Display for ConsoleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleAction::Read => write!(f, "read from"),
            ConsoleAction::Write => write!(f, "write to"),
        }
    }
}

impl ConsoleError {
    #[must_use]
    pub fn read(source: std::io::Error) -> Self {
        Self::Io {
            action: ConsoleAction::Read,
            source,
        }
    }

    #[must_use]
    pub fn write(source: std::io::Error) -> Self {
        Self::Io {
            action: ConsoleAction::Write,
            source,
        }
    }
}

/// Convert [`std::io::Result`]s from writing exercise output into [`miette::Result`]s.
pub trait WriteResultExt<T> {
    /// # Errors
    ///
    /// Wraps the [`std::io::Error`] in [`ConsoleError::Io`].
    fn or_write_error(self) -> miette::Result<T>;
}

impl<T> WriteResultExt<T> for std::io::Result<T> {
    fn or_write_error(self) -> miette::Result<T> {
        self.map_err(|error| ConsoleError::write(error).into())
    }
}
