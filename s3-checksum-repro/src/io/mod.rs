/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Aggregated byte buffers
pub mod aggregated_bytes;

pub use aggregated_bytes::AggregatedBytes;
