/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Reproduction harness for a response checksum mismatch observed when
//! fetching compressed objects from Amazon S3.
//!
//! The failure only manifests when the response body is actually drained: a
//! `GetObject` request can succeed and hand back metadata, while reading the
//! body to end-of-stream afterwards fails integrity validation inside the
//! SDK. The crate keeps the two phases separate so each can be exercised and
//! observed on its own:
//!
//! 1. request phase - [`Client::fetch`] sends `GetObject` and resolves with a
//!    [`FetchOutput`](crate::operation::fetch::FetchOutput) whose body is
//!    still unread
//! 2. consumption phase - draining the body
//!    ([`FetchOutput::collect`](crate::operation::fetch::FetchOutput::collect)
//!    or [`io::AggregatedBytes::from_byte_stream`]) runs the SDK's response
//!    checksum validation and is where the mismatch surfaces
//!
//! Whether the mismatch originates from validating compressed-on-wire bytes
//! against a checksum computed over decoded bytes, or the reverse, is
//! intentionally left to the SDK under observation. This crate never
//! decompresses and never second-guesses the SDK's verdict.

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Error types emitted by `s3-checksum-repro`
pub mod error;

/// Common types used by `s3-checksum-repro`
pub mod types;

/// Client configuration
pub mod config;

/// Reproduction client
pub mod client;

/// Fetch operation
pub mod operation;

/// Types and helpers for I/O
pub mod io;

pub use client::Client;
pub use config::Config;
