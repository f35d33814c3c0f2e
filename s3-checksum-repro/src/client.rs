/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::Config;

/// Reproduction client for fetching a single object from Amazon S3.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Fetch a single object from S3.
    ///
    /// Constructs a fluent builder for the
    /// [`Fetch`](crate::operation::fetch::builders::FetchFluentBuilder) operation.
    ///
    /// `send()` resolves once the request phase completes. The returned
    /// [`FetchOutput`](crate::operation::fetch::FetchOutput) still owns the
    /// unread body; consuming it is a separate step that can fail on its own.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn fetch_object(
    ///     client: &s3_checksum_repro::Client,
    /// ) -> Result<(), s3_checksum_repro::error::Error> {
    ///     let output = client
    ///         .fetch()
    ///         .bucket("my-bucket")
    ///         .key("my-key.br")
    ///         .send()
    ///         .await?;
    ///
    ///     // The request succeeded, but the body has not been read yet.
    ///     // collect() drains it and is where checksum validation runs.
    ///     let data = output.collect().await?;
    ///     // ... do something with data
    ///     Ok(())
    /// }
    /// ```
    pub fn fetch(&self) -> crate::operation::fetch::builders::FetchFluentBuilder {
        crate::operation::fetch::builders::FetchFluentBuilder::new(self.handle.clone())
    }
}
