// SPDX-License-Identifier: MPL-2.0
//! The four linear wizard steps.

use std::fmt;

/// Wizard phase. Only ever advances forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Upload,
    Languages,
    Processing,
    Result,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Step; 4] = [Step::Upload, Step::Languages, Step::Processing, Step::Result];

    /// One-based step number shown to the user.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Step::Upload => 1,
            Step::Languages => 2,
            Step::Processing => 3,
            Step::Result => 4,
        }
    }

    /// The following step, or `None` at the end.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Upload => Some(Step::Languages),
            Step::Languages => Some(Step::Processing),
            Step::Processing => Some(Step::Result),
            Step::Result => None,
        }
    }

    /// Whether the indicator should highlight `self` when `current` is active.
    #[must_use]
    pub fn is_reached(self, current: Step) -> bool {
        current >= self
    }

    /// i18n key of the indicator label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Step::Upload => "step-upload",
            Step::Languages => "step-languages",
            Step::Processing => "step-processing",
            Step::Result => "step-result",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Upload => "upload",
            Step::Languages => "languages",
            Step::Processing => "processing",
            Step::Result => "result",
        };
        write!(f, "{} ({name})", self.number())
    }
}
