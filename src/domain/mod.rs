// SPDX-License-Identifier: MPL-2.0
//! Domain layer - wizard rules with no UI or network dependencies.
//!
//! # Modules
//!
//! - [`language`]: The shared language catalog ([`Language`](language::Language))
//! - [`progress`]: Bounded progress values ([`Progress`](progress::Progress),
//!   [`ProgressStep`](progress::ProgressStep))
//! - [`session`]: Session state and forward-only transitions ([`Session`](session::Session))
//! - [`step`]: The four wizard phases ([`Step`](step::Step))
//! - [`video_file`]: Declared-type validation ([`VideoFile`](video_file::VideoFile))

pub mod language;
pub mod progress;
pub mod session;
pub mod step;
pub mod video_file;

pub use language::Language;
pub use progress::{Progress, ProgressStep};
pub use session::{Session, StepError, TickOutcome, UploadStatus};
pub use step::Step;
pub use video_file::{Rejection, VideoFile};
