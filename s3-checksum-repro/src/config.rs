/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::{Credentials, Region};
use aws_smithy_runtime_api::client::http::{HttpClient, SharedHttpClient};
use aws_smithy_runtime_api::shared::IntoShared;

use crate::types::{ChecksumValidation, RequestAuth};

/// Region the reproduction bucket lives in.
pub(crate) const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    checksum_validation: ChecksumValidation,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the response checksum validation policy the client was built with.
    pub fn checksum_validation(&self) -> &ChecksumValidation {
        &self.checksum_validation
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    region: Option<Region>,
    auth: RequestAuth,
    checksum_validation: ChecksumValidation,
    endpoint_url: Option<String>,
    http_client: Option<SharedHttpClient>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the region requests are signed for and resolved in.
    ///
    /// Default is `us-east-1`, where the reproduction bucket lives.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Set how requests are authenticated.
    ///
    /// Default is [RequestAuth::Anonymous], which skips request signing the
    /// way the observed public-bucket reproduction does.
    pub fn auth(mut self, auth: RequestAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Set the response checksum validation policy.
    ///
    /// Default is [ChecksumValidation::Strict]. Switching to
    /// [ChecksumValidation::WhenRequired] is the workaround that lets a
    /// compressed object drain without an integrity error.
    pub fn checksum_validation(mut self, checksum_validation: ChecksumValidation) -> Self {
        self.checksum_validation = checksum_validation;
        self
    }

    /// Use a custom endpoint instead of the Amazon S3 one derived from the region.
    ///
    /// Custom endpoints are addressed path-style since S3-compatible services
    /// generally do not resolve virtual-hosted bucket names.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Set the HTTP client to connect with.
    pub fn http_client(mut self, http_client: impl HttpClient + 'static) -> Self {
        self.http_client = Some(http_client.into_shared());
        self
    }

    /// Set an explicit S3 client to use, ignoring the other builder settings.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Config {
        let client = match self.client {
            Some(client) => client,
            None => {
                let region = self
                    .region
                    .unwrap_or_else(|| Region::from_static(DEFAULT_REGION));
                let mut builder = aws_sdk_s3::config::Config::builder()
                    .region(region)
                    .response_checksum_validation((&self.checksum_validation).into());

                // Anonymous access leaves the credentials provider unset so
                // the request goes out unsigned.
                if let RequestAuth::Static {
                    access_key_id,
                    secret_access_key,
                } = &self.auth
                {
                    builder = builder.credentials_provider(Credentials::new(
                        access_key_id.clone(),
                        secret_access_key.clone(),
                        None,
                        None,
                        "static",
                    ));
                }

                if let Some(endpoint_url) = self.endpoint_url {
                    builder = builder.endpoint_url(endpoint_url).force_path_style(true);
                }

                if let Some(http_client) = self.http_client {
                    builder = builder.http_client(http_client);
                }

                aws_sdk_s3::Client::from_conf(builder.build())
            }
        };

        Config {
            checksum_validation: self.checksum_validation,
            client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Builder::default();
        assert!(builder.region.is_none());
        assert!(matches!(builder.auth, RequestAuth::Anonymous));
        assert_eq!(ChecksumValidation::Strict, builder.checksum_validation);
    }

    #[test]
    fn test_config_records_validation_policy() {
        let config = Config::builder()
            .checksum_validation(ChecksumValidation::WhenRequired)
            .build();
        assert_eq!(
            &ChecksumValidation::WhenRequired,
            config.checksum_validation()
        );
    }
}
