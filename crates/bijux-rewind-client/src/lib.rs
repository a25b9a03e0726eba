// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod client;
mod errors;

pub use client::{ClientConfig, RewindClient};
pub use errors::ClientError;

pub const CRATE_NAME: &str = "bijux-rewind-client";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
