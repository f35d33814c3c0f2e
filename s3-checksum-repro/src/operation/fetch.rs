/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Fluent builders for the fetch operation
pub mod builders;

mod input;
pub use input::{FetchInput, FetchInputBuilder};

mod object_meta;
pub use object_meta::ObjectMetadata;

mod output;
pub use output::FetchOutput;

use std::sync::Arc;

use crate::client::Handle;
use crate::error;

/// Operation struct for fetching a single object from Amazon S3
#[derive(Clone, Default, Debug)]
pub(crate) struct Fetch;

impl Fetch {
    /// Execute the request phase of a single [`FetchInput`].
    ///
    /// The response body is handed back unread. Draining it is the caller's
    /// second phase; a success here does not guarantee the body can be read
    /// to completion.
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: FetchInput,
    ) -> Result<FetchOutput, error::Error> {
        let bucket = input
            .bucket()
            .ok_or_else(|| error::invalid_input("bucket is required"))?;
        let key = input
            .key()
            .ok_or_else(|| error::invalid_input("key is required"))?;

        tracing::debug!(bucket, key, "sending GetObject");
        let resp = handle
            .config
            .client()
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        let object_meta = ObjectMetadata::from(&resp);
        tracing::debug!(
            content_encoding = ?object_meta.content_encoding,
            content_type = ?object_meta.content_type,
            checksum = ?object_meta.checksum(),
            "GetObject succeeded"
        );

        Ok(FetchOutput::new(object_meta, resp.body))
    }
}
