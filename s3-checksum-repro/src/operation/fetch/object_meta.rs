/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::get_object::GetObjectOutput;

/// Object metadata other than the body, captured from the `GetObject` response.
///
/// Values are carried exactly as S3 returned them. In particular the
/// `content_encoding` and checksum fields reflect what was stored on the
/// object, which is what makes the mismatch reproducible: the metadata
/// arrives intact even when the body later fails validation.
#[derive(Debug, Clone, Default)]
pub struct ObjectMetadata {
    /// Content encoding the object was stored with (e.g. `br`).
    pub content_encoding: Option<String>,
    /// MIME type describing the object data.
    pub content_type: Option<String>,
    /// Language the content is in.
    pub content_language: Option<String>,
    pub(crate) content_length: Option<i64>,
    /// Entity tag of the object.
    pub e_tag: Option<String>,
    /// Creation date of the object.
    pub last_modified: Option<::aws_smithy_types::DateTime>,
    /// Version of the object.
    pub version_id: Option<String>,
    /// If the object expiration is configured, the expiry information.
    pub expiration: Option<String>,
    /// Base64-encoded CRC32 checksum of the object, when returned.
    pub checksum_crc32: Option<String>,
    /// Base64-encoded CRC32C checksum of the object, when returned.
    pub checksum_crc32_c: Option<String>,
    /// Base64-encoded SHA-1 digest of the object, when returned.
    pub checksum_sha1: Option<String>,
    /// Base64-encoded SHA-256 digest of the object, when returned.
    pub checksum_sha256: Option<String>,
}

impl ObjectMetadata {
    /// The size of the response body in bytes, when reported.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length.map(|length| length as u64)
    }

    /// The first checksum returned with the response, as an `(algorithm, value)` pair.
    pub fn checksum(&self) -> Option<(&'static str, &str)> {
        [
            ("crc32", self.checksum_crc32.as_deref()),
            ("crc32c", self.checksum_crc32_c.as_deref()),
            ("sha1", self.checksum_sha1.as_deref()),
            ("sha256", self.checksum_sha256.as_deref()),
        ]
        .into_iter()
        .find_map(|(algorithm, value)| value.map(|v| (algorithm, v)))
    }
}

impl From<&GetObjectOutput> for ObjectMetadata {
    fn from(value: &GetObjectOutput) -> Self {
        Self {
            content_encoding: value.content_encoding.clone(),
            content_type: value.content_type.clone(),
            content_language: value.content_language.clone(),
            content_length: value.content_length,
            e_tag: value.e_tag.clone(),
            last_modified: value.last_modified,
            version_id: value.version_id.clone(),
            expiration: value.expiration.clone(),
            checksum_crc32: value.checksum_crc32.clone(),
            checksum_crc32_c: value.checksum_crc32_c.clone(),
            checksum_sha1: value.checksum_sha1.clone(),
            checksum_sha256: value.checksum_sha256.clone(),
        }
    }
}
