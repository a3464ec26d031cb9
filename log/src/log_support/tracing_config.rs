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

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure where log output goes, at which level, and whether the subscriber is
/// installed for the whole process or just the current thread.
///
/// Use [`crate::try_initialize_logging_global`] or
/// [`crate::try_initialize_logging_thread_local`] to install it.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
    pub scope: TracingScope,
}

/// Where log lines are written. There is deliberately no `stdout` variant, since the
/// exercises own `stdout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stderr,
    File(String /* log file path */),
    StderrAndFile(String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    /// Set once per process, can't be unset. For binaries.
    Global,
    /// Set for the current thread until the returned guard is dropped. For tests.
    ThreadLocal,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
            scope: TracingScope::Global,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            writer_config: WriterConfig::Stderr,
            level_filter: LevelFilter::DEBUG,
            scope: TracingScope::Global,
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TracingScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// The file path that log lines are written to, if any.
    #[must_use]
    pub fn get_file_path(&self) -> Option<&str> {
        match &self.writer_config {
            WriterConfig::File(path) | WriterConfig::StderrAndFile(path) => {
                Some(path.as_str())
            }
            WriterConfig::None | WriterConfig::Stderr => None,
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Self::new_file(None)
        }
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            level_filter: LevelFilter::DEBUG,
            scope: TracingScope::Global,
        }
    }
}

/// Compose two configs. The more verbose level filter wins, writers are merged (see
/// [`WriterConfig`]'s [`Add`] impl), and the scope of `rhs` wins.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
            scope: rhs.scope,
        }
    }
}

/// Merge two writer configs. `rhs` has higher specificity, so a file path in `rhs`
/// replaces a file path in `self`. `None` on either side is ignored.
/// - `File(a) + File(b) = File(b)`.
/// - `Stderr + File(b) = StderrAndFile(b)`.
/// - `StderrAndFile(a) + File(b) = StderrAndFile(b)`.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{File, None, Stderr, StderrAndFile};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Stderr, Stderr) => Stderr,
            (Stderr | StderrAndFile(_), File(path))
            | (File(_) | Stderr | StderrAndFile(_), StderrAndFile(path)) => {
                StderrAndFile(path)
            }
            (File(_), File(path)) => File(path),
            (File(path) | StderrAndFile(path), Stderr) => StderrAndFile(path),
        }
    }
}

#[cfg(test)]
mod tests_add_configs {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_add_writer_configs() {
        let none = WriterConfig::None;
        let stderr = WriterConfig::Stderr;
        let file_a = WriterConfig::File("a.log".to_string());
        let file_b = WriterConfig::File("b.log".to_string());
        let both_a = WriterConfig::StderrAndFile("a.log".to_string());
        let both_b = WriterConfig::StderrAndFile("b.log".to_string());

        // No collision merge.
        assert_eq!(none.clone() + none.clone(), none);
        assert_eq!(none.clone() + stderr.clone(), stderr);
        assert_eq!(file_a.clone() + none.clone(), file_a);
        assert_eq!(stderr.clone() + file_a.clone(), both_a);
        assert_eq!(file_a.clone() + stderr.clone(), both_a);

        // Collision (rhs has higher specificity).
        assert_eq!(file_a.clone() + file_b.clone(), file_b);
        assert_eq!(both_a.clone() + file_b.clone(), both_b);
        assert_eq!(file_a.clone() + both_b.clone(), both_b);
        assert_eq!(both_b.clone() + stderr.clone(), both_b);
        assert_eq!(stderr.clone() + stderr.clone(), stderr);
    }

    #[test]
    fn test_add_tracing_configs_keeps_most_verbose_level() {
        let quiet: TracingConfig = LevelFilter::WARN.into();
        let chatty: TracingConfig = TracingConfig::new_stderr()
            .with_scope(TracingScope::ThreadLocal);
        let chatty = TracingConfig {
            level_filter: LevelFilter::TRACE,
            ..chatty
        };

        // The verbose config is on the left, so its level must survive a quieter rhs.
        let merged = chatty + quiet;

        assert_eq!(merged.level_filter, LevelFilter::TRACE);
        assert_eq!(
            merged.writer_config,
            WriterConfig::StderrAndFile(DEFAULT_LOG_FILE_NAME.to_string())
        );
        assert_eq!(merged.scope, TracingScope::Global);
    }

    #[test]
    fn test_from_level_logs_to_default_file() {
        let config: TracingConfig = tracing::Level::INFO.into();
        assert_eq!(config.get_level_filter(), LevelFilter::INFO);
        assert_eq!(config.get_file_path(), Some(DEFAULT_LOG_FILE_NAME));
        assert_eq!(TracingConfig::new_stderr().get_file_path(), None);
    }
}
