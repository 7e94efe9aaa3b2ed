// ============================================================
// Per-File Ingestion Errors
// ============================================================
// The recoverable error tier. A file that cannot be read or
// decoded produces one of these; the build loop logs it and
// moves on to the next manifest entry.
//
// Anything outside a single file (manifest, output) is fatal
// and travels as anyhow::Error instead.

use std::{path::PathBuf, string::FromUtf8Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    /// Missing file, permission denied, path is a directory, ...
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes on disk are not valid UTF-8
    #[error("'{}' is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl IngestError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub fn decode(path: impl Into<PathBuf>, source: FromUtf8Error) -> Self {
        Self::Decode { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_names_the_file() {
        let err = IngestError::read(
            "rtl/missing.v",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("rtl/missing.v"));
        assert!(msg.contains("no such file"));
        assert!(matches!(err, IngestError::Read { ref path, .. } if path == &PathBuf::from("rtl/missing.v")));
    }

    #[test]
    fn test_decode_error_names_the_file() {
        let bad = String::from_utf8(vec![0x66, 0xff]).unwrap_err();
        let err = IngestError::decode("rtl/latin1.v", bad);
        assert!(err.to_string().contains("rtl/latin1.v"));
        assert!(matches!(err, IngestError::Decode { .. }));
    }
}
