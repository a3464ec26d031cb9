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

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer,
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{LogSetupError, TracingConfig, TracingScope, WriterConfig,
            try_create_file_appender};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

impl TracingConfig {
    /// Install the subscriber described by this config. Returns a guard when the
    /// [`TracingScope`] is [`TracingScope::ThreadLocal`]; dropping it restores the
    /// previous subscriber of the thread.
    ///
    /// # Errors
    ///
    /// Fails if the log file can't be created, or if a global subscriber was already
    /// installed.
    pub fn install(self) -> miette::Result<Option<dispatcher::DefaultGuard>> {
        let scope = self.scope;
        let layers = try_create_layers(&self)?;
        let registry = tracing_subscriber::registry().with(layers);
        match scope {
            TracingScope::Global => {
                registry
                    .try_init()
                    .map_err(LogSetupError::SubscriberAlreadySet)?;
                Ok(None)
            }
            TracingScope::ThreadLocal => Ok(Some(registry.set_default())),
        }
    }
}

/// Returns the layers for `config`, without installing them. The first layer is the
/// level filter, followed by a `stderr` layer and a file layer when configured.
///
/// # Errors
///
/// Fails if the log file can't be created.
pub fn try_create_layers(
    config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = config.get_level_filter();
    let writer_config = config.get_writer_config();

    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> =
        vec![Box::new(level_filter)];

    if let Some(layer) = create_stderr_layer(level_filter, &writer_config) {
        layers.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        layers.push(layer);
    }

    Ok(layers)
}

pub fn create_stderr_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::Stderr | WriterConfig::StderrAndFile(_) => Some(Box::new(
            create_fmt!()
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// # Errors
///
/// Fails if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::File(file_path) | WriterConfig::StderrAndFile(file_path) => {
            let file = try_create_file_appender(file_path)?;
            Ok(Some(Box::new(
                create_fmt!()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            )))
        }
        WriterConfig::None | WriterConfig::Stderr => Ok(None),
    }
}


/// This test works with the binary under test, `tracing_test_bin`, which logs a few
/// messages to `stderr`. There is no easy way to capture `stderr` without spawning a new
/// process, so `assert_cmd` is used.
///
/// If tests in this module fail, make sure that the binary under test has been built, by
/// running `cargo build && cargo test` rather than just `cargo test`.
#[cfg(test)]
mod test_tracing_bin_stderr {
    use assert_cmd::Command;

    const EXPECTED: [&str; 4] = ["error", "warn", "info", "debug"];

    #[test]
    fn stderr_has_logs_and_stdout_is_clean() {
        let output = Command::cargo_bin("tracing_test_bin")
            .unwrap()
            .ok()
            .unwrap();

        let stderr = String::from_utf8_lossy(output.stderr.as_slice());
        for it in &EXPECTED {
            assert!(stderr.contains(it));
        }
        assert!(!stderr.contains("trace"));
        assert!(output.stdout.is_empty());
    }
}
