// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer: I/O with the outside world.
//!
//! - [`upload`]: multipart upload to the translation backend

pub mod upload;

pub use upload::{upload_video, UploadRequest};
