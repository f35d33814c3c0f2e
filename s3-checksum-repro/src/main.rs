/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Reproduction for a checksum mismatch when fetching compressed objects from
//! Amazon S3.
//!
//! Requirements to reproduce:
//! - an S3 object stored with `Content-Encoding: br` metadata
//! - a CRC32 checksum on the object
//! - the stream must actually be CONSUMED, not just transformed

use std::process::ExitCode;

use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;

use s3_checksum_repro::error::Error;
use s3_checksum_repro::io::AggregatedBytes;
use s3_checksum_repro::types::ChecksumValidation;
use s3_checksum_repro::{Client, Config};

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "s3-checksum-repro")]
#[command(about = "Fetches a compressed object from S3 and fully consumes the body stream.")]
struct Args {
    /// Bucket containing the object
    #[arg(long, default_value = "s3-compression-checksum-reproduction")]
    bucket: String,

    /// Key of the compressed object
    #[arg(long, default_value = "uncompressed.txt.br")]
    key: String,

    /// Region the bucket endpoint is resolved in
    #[arg(long, default_value = "us-east-1")]
    region: String,

    /// Use a custom (S3-compatible) endpoint instead of Amazon S3
    #[arg(long)]
    endpoint_url: Option<String>,

    /// WORKAROUND: relax response checksum validation so the object drains cleanly
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    skip_checksum_validation: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ ERROR: {err}");
            eprintln!("Full error: {}", DisplayErrorContext(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let checksum_validation = if args.skip_checksum_validation {
        ChecksumValidation::WhenRequired
    } else {
        ChecksumValidation::Strict
    };

    let mut builder = Config::builder()
        .region(Region::new(args.region))
        .checksum_validation(checksum_validation);
    if let Some(endpoint_url) = args.endpoint_url {
        builder = builder.endpoint_url(endpoint_url);
    }
    let client = Client::new(builder.build());

    println!("Fetching compressed object from S3...");
    let output = client
        .fetch()
        .bucket(args.bucket)
        .key(args.key)
        .send()
        .await?;
    println!("✓ GetObject succeeded");

    let (meta, stream) = output.into_parts();
    println!(
        "Response metadata: content-encoding={:?} content-type={:?} checksum={:?}",
        meta.content_encoding,
        meta.content_type,
        meta.checksum(),
    );
    println!("✓ Transformed to byte stream");

    println!("Reading stream (this triggers checksum validation)...");
    let data = AggregatedBytes::from_byte_stream(stream).await?;

    println!("✓ SUCCESS: stream consumed without error");
    println!("Object contents: {}", String::from_utf8_lossy(&data.to_vec()));

    Ok(())
}
