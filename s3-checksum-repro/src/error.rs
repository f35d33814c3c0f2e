/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_smithy_types::byte_stream;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of fetch errors, grouped by the phase they originate from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// The `GetObject` request itself failed (dispatch, connection, auth, or a
    /// service error other than a missing resource)
    Transport,

    /// Resource not found (bucket or key)
    NotFound,

    /// The response body failed integrity validation while it was being drained
    ChecksumMismatch,

    /// The response body could not be read for some reason other than integrity
    BodyRead,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::Transport => write!(f, "request failed"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::ChecksumMismatch => write!(f, "response body checksum mismatch"),
            ErrorKind::BodyRead => write!(f, "failed to read response body"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::NotFound,
            _ => ErrorKind::Transport,
        };

        Error::new(kind, value)
    }
}

/// Classify an error raised while draining the response body.
///
/// The SDK surfaces its integrity failure as an
/// [`aws_smithy_checksums::body::validate::Error`] somewhere in the source
/// chain of the byte stream error; everything else is an ordinary read
/// failure.
pub(crate) fn consumption_failed(err: byte_stream::error::Error) -> Error {
    let kind = if chain_has_checksum_mismatch(&err) {
        ErrorKind::ChecksumMismatch
    } else {
        ErrorKind::BodyRead
    };
    Error::new(kind, err)
}

fn chain_has_checksum_mismatch(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut next = Some(err);
    while let Some(cur) = next {
        if cur
            .downcast_ref::<aws_smithy_checksums::body::validate::Error>()
            .is_some()
        {
            return true;
        }
        // Some body wrappers stringify the source instead of preserving it.
        if cur.to_string().to_ascii_lowercase().contains("checksum mismatch") {
            return true;
        }
        next = cur.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Wrapper(BoxError);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "body stream failed")
        }
    }

    impl std::error::Error for Wrapper {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(self.0.as_ref())
        }
    }

    #[test]
    fn test_classify_checksum_mismatch_by_message() {
        let inner = io::Error::other("Checksum mismatch. Expected d/Mr7g== but it was B2XxXA==");
        let err = Wrapper(inner.into());
        assert!(chain_has_checksum_mismatch(&err));
    }

    #[test]
    fn test_classify_plain_read_failure() {
        let inner = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer");
        let err = Wrapper(inner.into());
        assert!(!chain_has_checksum_mismatch(&err));
    }

    #[test]
    fn test_error_display_matches_kind() {
        let err = Error::new(ErrorKind::ChecksumMismatch, "boom");
        assert_eq!("response body checksum mismatch", format!("{err}"));
        let err = Error::new(ErrorKind::NotFound, "boom");
        assert_eq!("resource not found", format!("{err}"));
    }
}
