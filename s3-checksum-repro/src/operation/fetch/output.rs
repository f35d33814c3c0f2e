/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::primitives::ByteStream;

use super::ObjectMetadata;
use crate::error;
use crate::io::AggregatedBytes;

/// Output of the request phase of a fetch.
///
/// Holds the object metadata and the still-unread body. Nothing has been
/// validated yet: the SDK only runs response checksum validation while the
/// body streams through, so a successful `FetchOutput` says nothing about
/// whether consumption will succeed.
#[derive(Debug)]
#[non_exhaustive]
pub struct FetchOutput {
    object_meta: ObjectMetadata,
    body: ByteStream,
}

impl FetchOutput {
    pub(crate) fn new(object_meta: ObjectMetadata, body: ByteStream) -> Self {
        Self { object_meta, body }
    }

    /// Metadata returned with the `GetObject` response.
    pub fn object_meta(&self) -> &ObjectMetadata {
        &self.object_meta
    }

    /// Split the output into its metadata and the raw response byte stream.
    ///
    /// This is a transformation only. No bytes are read and the SDK's
    /// checksum validation does not run until the returned stream is drained.
    pub fn into_parts(self) -> (ObjectMetadata, ByteStream) {
        (self.object_meta, self.body)
    }

    /// Convert the output into the raw response byte stream, discarding the metadata.
    ///
    /// Like [`into_parts`](Self::into_parts), this on its own never raises an
    /// integrity error.
    pub fn into_byte_stream(self) -> ByteStream {
        self.body
    }

    /// Read the body to end-of-stream.
    ///
    /// This is the consumption phase. An object whose stored checksum does
    /// not match what the SDK computes over the received bytes fails here,
    /// with [`ErrorKind::ChecksumMismatch`](crate::error::ErrorKind::ChecksumMismatch),
    /// not at request time.
    pub async fn collect(self) -> Result<AggregatedBytes, error::Error> {
        AggregatedBytes::from_byte_stream(self.body).await
    }
}
