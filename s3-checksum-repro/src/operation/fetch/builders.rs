/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::sync::Arc;

use super::{Fetch, FetchInputBuilder, FetchOutput};
use crate::error;

/// Fluent builder for constructing a single object fetch
#[derive(Debug)]
pub struct FetchFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: FetchInputBuilder,
}

impl FetchFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the `GetObject` request and wait for the request phase to complete.
    ///
    /// The returned [`FetchOutput`] still owns the unread response body.
    pub async fn send(self) -> Result<FetchOutput, error::Error> {
        let input = self.inner.build();
        Fetch::orchestrate(self.handle, input).await
    }

    /// The S3 bucket name containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input.into());
        self
    }

    /// The S3 bucket name containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The key of the object to fetch.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input.into());
        self
    }

    /// The key of the object to fetch.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }
}
