/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Input type for fetching a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct FetchInput {
    /// The S3 bucket name containing the object.
    pub bucket: Option<String>,

    /// The key of the object to fetch.
    pub key: Option<String>,
}

impl FetchInput {
    /// The S3 bucket name containing the object.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the object to fetch.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// A builder for [FetchInput]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct FetchInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl FetchInputBuilder {
    /// The S3 bucket name containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The S3 bucket name containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The key of the object to fetch.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key of the object to fetch.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Consumes the builder and constructs a [`FetchInput`]
    ///
    /// Required fields are validated when the operation is sent, not here.
    pub fn build(self) -> FetchInput {
        FetchInput {
            bucket: self.bucket,
            key: self.key,
        }
    }
}
