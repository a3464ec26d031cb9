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

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::LogSetupError;

/// Create a (non rolling) file appender for `file_path`. A bare file name is created in
/// the current folder. The file is created (or opened for appending) right away.
///
/// # Errors
///
/// Returns [`LogSetupError::InvalidLogFilePath`] if `file_path` has no file name, or if
/// the file can't be created.
pub fn try_create_file_appender(
    file_path: &str,
) -> miette::Result<RollingFileAppender> {
    let path = Path::new(file_path);

    let Some(file_name) = path.file_name() else {
        return Err(LogSetupError::InvalidLogFilePath {
            file_path: file_path.to_string(),
        }
        .into());
    };

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(folder)
        .map_err(|_| {
            LogSetupError::InvalidLogFilePath {
                file_path: file_path.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        assert!(try_create_file_appender(path.to_str().unwrap()).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_missing_folder_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file_in_the_way");
        std::fs::write(&path, "").unwrap();
        let path = path.join("session.log");
        assert!(try_create_file_appender(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let report = try_create_file_appender("..").unwrap_err();
        assert!(report.to_string().contains("as a log file"));
    }
}
