// SPDX-License-Identifier: MPL-2.0
//! Wizard session state and its forward-only transitions.
//!
//! `Session` is the one piece of the application with real rules: the step
//! only moves forward, each transition is valid in exactly one step, and the
//! progress counter stops at 100. The UI layer only calls these methods and
//! renders the result.

use super::language::{self, Language};
use super::progress::{Progress, ProgressStep};
use super::step::Step;
use super::video_file::VideoFile;
use crate::error::UploadError;
use std::fmt;

/// Result reference used when no backend URL is available.
pub const PLACEHOLDER_RESULT_URL: &str = "https://example.com/translated-video.mp4";

/// A transition requested in the wrong step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// The operation is only valid in `expected`.
    OutOfOrder { expected: Step, actual: Step },
    /// Processing cannot start before a file is accepted.
    NoFileSelected,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::OutOfOrder { expected, actual } => {
                write!(f, "operation requires step {expected}, current step is {actual}")
            }
            StepError::NoFileSelected => write!(f, "no video file selected"),
        }
    }
}

impl std::error::Error for StepError {}

/// Outcome of a processing tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress moved to the contained percentage; still processing.
    Advanced(u8),
    /// Progress hit 100 and the session moved to the result step.
    Completed,
}

/// State of the optional backend upload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// No upload was requested.
    #[default]
    Idle,
    InFlight,
    Completed(String),
    Failed(UploadError),
}

/// Session state held by the application root.
#[derive(Debug, Clone)]
pub struct Session {
    step: Step,
    selected_file: Option<VideoFile>,
    source_language: Language,
    target_language: Language,
    progress: Progress,
    progress_step: ProgressStep,
    result_url: Option<String>,
    upload: UploadStatus,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            language::resolve_or(None, language::DEFAULT_SOURCE),
            language::resolve_or(None, language::DEFAULT_TARGET),
            ProgressStep::default(),
        )
    }
}

impl Session {
    #[must_use]
    pub fn new(source: Language, target: Language, progress_step: ProgressStep) -> Self {
        Self {
            step: Step::Upload,
            selected_file: None,
            source_language: source,
            target_language: target,
            progress: Progress::zero(),
            progress_step,
            result_url: None,
            upload: UploadStatus::Idle,
        }
    }

    fn require(&self, expected: Step) -> Result<(), StepError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(StepError::OutOfOrder {
                expected,
                actual: self.step,
            })
        }
    }

    /// Moves to the following step. Callers check the current one first.
    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Stores an accepted file and moves Upload → Languages.
    ///
    /// # Errors
    ///
    /// Fails outside the upload step.
    pub fn accept_file(&mut self, file: VideoFile) -> Result<(), StepError> {
        self.require(Step::Upload)?;
        self.selected_file = Some(file);
        self.advance();
        Ok(())
    }

    /// # Errors
    ///
    /// Fails outside the languages step.
    pub fn set_source_language(&mut self, language: Language) -> Result<(), StepError> {
        self.require(Step::Languages)?;
        self.source_language = language;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails outside the languages step.
    pub fn set_target_language(&mut self, language: Language) -> Result<(), StepError> {
        self.require(Step::Languages)?;
        self.target_language = language;
        Ok(())
    }

    /// Resets progress to 0 and moves Languages → Processing.
    ///
    /// # Errors
    ///
    /// Fails outside the languages step or when no file was accepted.
    pub fn start_processing(&mut self) -> Result<(), StepError> {
        self.require(Step::Languages)?;
        if self.selected_file.is_none() {
            return Err(StepError::NoFileSelected);
        }
        self.progress = Progress::zero();
        self.advance();
        Ok(())
    }

    /// Advances progress by the fixed step. At 100 the result reference is
    /// filled in and the session moves Processing → Result.
    ///
    /// # Errors
    ///
    /// Fails outside the processing step.
    pub fn tick(&mut self) -> Result<TickOutcome, StepError> {
        self.require(Step::Processing)?;
        self.progress = self.progress.advance(self.progress_step);
        if !self.progress.is_complete() {
            return Ok(TickOutcome::Advanced(self.progress.value()));
        }

        let url = match &self.upload {
            UploadStatus::Completed(url) => url.clone(),
            _ => PLACEHOLDER_RESULT_URL.to_string(),
        };
        self.result_url = Some(url);
        self.advance();
        Ok(TickOutcome::Completed)
    }

    /// Marks the upload as started.
    pub fn begin_upload(&mut self) {
        self.upload = UploadStatus::InFlight;
    }

    /// Records the backend response.
    ///
    /// A URL received after the result step is shown replaces the placeholder.
    /// Returns true when the visible result reference changed.
    pub fn record_upload_result(&mut self, result: Result<String, UploadError>) -> bool {
        match result {
            Ok(url) => {
                let changed = self.step == Step::Result
                    && self.result_url.as_deref() != Some(url.as_str());
                if changed {
                    self.result_url = Some(url.clone());
                }
                self.upload = UploadStatus::Completed(url);
                changed
            }
            Err(err) => {
                self.upload = UploadStatus::Failed(err);
                false
            }
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&VideoFile> {
        self.selected_file.as_ref()
    }

    #[must_use]
    pub fn source_language(&self) -> Language {
        self.source_language
    }

    #[must_use]
    pub fn target_language(&self) -> Language {
        self.target_language
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn progress_step(&self) -> ProgressStep {
        self.progress_step
    }

    /// Whether the simulated processing timer should be running.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.step == Step::Processing
    }

    #[must_use]
    pub fn result_url(&self) -> Option<&str> {
        self.result_url.as_deref()
    }

    #[must_use]
    pub fn upload(&self) -> &UploadStatus {
        &self.upload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> VideoFile {
        VideoFile::from_declared("/videos/interview.mp4").expect("mp4 is video")
    }

    fn session_in_processing() -> Session {
        let mut session = Session::default();
        session.accept_file(video()).expect("upload step");
        session.start_processing().expect("languages step");
        session
    }

    #[test]
    fn default_session_starts_at_upload_with_default_languages() {
        let session = Session::default();
        assert_eq!(session.step(), Step::Upload);
        assert_eq!(session.source_language().code(), "en");
        assert_eq!(session.target_language().code(), "es");
        assert_eq!(session.progress().value(), 0);
        assert!(session.result_url().is_none());
        assert_eq!(session.upload(), &UploadStatus::Idle);
    }

    #[test]
    fn accept_file_moves_to_languages_and_keeps_name() {
        let mut session = Session::default();
        session.accept_file(video()).expect("accepted");
        assert_eq!(session.step(), Step::Languages);
        assert_eq!(
            session.selected_file().map(VideoFile::name),
            Some("interview.mp4")
        );
    }

    #[test]
    fn accept_file_twice_is_out_of_order() {
        let mut session = Session::default();
        session.accept_file(video()).expect("accepted");
        let err = session.accept_file(video()).unwrap_err();
        assert_eq!(
            err,
            StepError::OutOfOrder {
                expected: Step::Upload,
                actual: Step::Languages
            }
        );
    }

    #[test]
    fn languages_can_only_change_in_languages_step() {
        let mut session = Session::default();
        let french = language::find("fr").expect("fr");
        assert!(session.set_target_language(french).is_err());

        session.accept_file(video()).expect("accepted");
        session.set_target_language(french).expect("languages step");
        session
            .set_source_language(language::find("ja").expect("ja"))
            .expect("languages step");
        assert_eq!(session.target_language().code(), "fr");
        assert_eq!(session.source_language().code(), "ja");
    }

    #[test]
    fn start_processing_begins_at_zero() {
        let session = session_in_processing();
        assert_eq!(session.step(), Step::Processing);
        assert_eq!(session.progress().value(), 0);
        assert!(session.is_processing());
    }

    #[test]
    fn start_processing_requires_languages_step() {
        let mut session = Session::default();
        assert_eq!(
            session.start_processing(),
            Err(StepError::OutOfOrder {
                expected: Step::Languages,
                actual: Step::Upload
            })
        );
    }

    #[test]
    fn ticks_reach_exactly_hundred_then_complete() {
        let mut session = session_in_processing();
        let mut last = 0;
        loop {
            match session.tick().expect("processing step") {
                TickOutcome::Advanced(value) => {
                    assert_eq!(value, last + 5);
                    assert!(value < 100);
                    last = value;
                }
                TickOutcome::Completed => break,
            }
        }
        assert_eq!(session.progress().value(), 100);
        assert_eq!(session.step(), Step::Result);
        assert!(!session.is_processing());
        assert_eq!(session.result_url(), Some(PLACEHOLDER_RESULT_URL));
        assert!(session.tick().is_err());
    }

    #[test]
    fn upload_url_received_during_processing_becomes_result() {
        let mut session = session_in_processing();
        session.begin_upload();
        assert!(!session.record_upload_result(Ok("http://backend/final.mp4".into())));
        while session.tick().expect("processing") != TickOutcome::Completed {}
        assert_eq!(session.result_url(), Some("http://backend/final.mp4"));
    }

    #[test]
    fn late_upload_url_replaces_placeholder() {
        let mut session = session_in_processing();
        session.begin_upload();
        while session.tick().expect("processing") != TickOutcome::Completed {}
        assert!(session.record_upload_result(Ok("http://backend/late.mp4".into())));
        assert_eq!(session.result_url(), Some("http://backend/late.mp4"));
    }

    #[test]
    fn failed_upload_keeps_placeholder() {
        let mut session = session_in_processing();
        session.begin_upload();
        let changed = session.record_upload_result(Err(UploadError::Network("refused".into())));
        assert!(!changed);
        while session.tick().expect("processing") != TickOutcome::Completed {}
        assert_eq!(session.result_url(), Some(PLACEHOLDER_RESULT_URL));
        assert!(matches!(session.upload(), UploadStatus::Failed(_)));
    }
}
