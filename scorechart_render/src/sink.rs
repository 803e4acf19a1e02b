// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output-sink capability.

use std::fs;
use std::io;
use std::path::Path;

/// Persists a payload at a caller-chosen destination.
///
/// Writes overwrite whatever the destination held before. Concurrent writes
/// to one destination are not coordinated.
pub trait OutputSink {
    /// Writes `payload` to `destination`.
    fn write(&mut self, destination: &Path, payload: &[u8]) -> io::Result<()>;
}

/// An [`OutputSink`] backed by the filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSink;

impl OutputSink for FileSink {
    fn write(&mut self, destination: &Path, payload: &[u8]) -> io::Result<()> {
        fs::write(destination, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "a much longer previous payload").unwrap();
        FileSink.write(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn missing_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.html");
        assert!(FileSink.write(&path, b"x").is_err());
    }
}
