/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::config::ResponseChecksumValidation;

/// How `GetObject` requests are authenticated.
#[derive(Clone, Default)]
pub enum RequestAuth {
    /// Skip request signing entirely.
    ///
    /// This is the signer bypass used against publicly readable buckets,
    /// where no credentials are available and none are needed.
    #[default]
    Anonymous,

    /// Sign requests with a static credential pair.
    Static {
        /// Access key id
        access_key_id: String,
        /// Secret access key
        secret_access_key: String,
    },
}

impl fmt::Debug for RequestAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestAuth::Anonymous => write!(f, "Anonymous"),
            RequestAuth::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"** redacted **")
                .finish(),
        }
    }
}

/// Response checksum validation policy applied while the body is drained.
///
/// Validation never runs at request time. It runs inside the SDK as the body
/// streams through, and its verdict is only reached at end-of-stream.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum ChecksumValidation {
    /// Validate whenever the response carries a checksum (the SDK default).
    ///
    /// An object stored with a `Content-Encoding` tag and a CRC32 checksum
    /// fails consumption under this policy - the defect under reproduction.
    #[default]
    Strict,

    /// Only validate when the operation requires it, which `GetObject` does
    /// not. This skips validation entirely and is the documented workaround.
    WhenRequired,
}

impl From<&ChecksumValidation> for ResponseChecksumValidation {
    fn from(value: &ChecksumValidation) -> Self {
        match value {
            ChecksumValidation::Strict => ResponseChecksumValidation::WhenSupported,
            ChecksumValidation::WhenRequired => ResponseChecksumValidation::WhenRequired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_validation_mapping() {
        assert!(matches!(
            ResponseChecksumValidation::from(&ChecksumValidation::Strict),
            ResponseChecksumValidation::WhenSupported
        ));
        assert!(matches!(
            ResponseChecksumValidation::from(&ChecksumValidation::WhenRequired),
            ResponseChecksumValidation::WhenRequired
        ));
    }

    #[test]
    fn test_static_auth_debug_redacts_secret() {
        let auth = RequestAuth::Static {
            access_key_id: "test".to_owned(),
            secret_access_key: "test".to_owned(),
        };
        let rendered = format!("{auth:?}");
        assert!(rendered.contains("access_key_id"));
        assert!(!rendered.contains("secret_access_key: \"test\""));
    }
}
