//! One validator per field kind. Each returns a [`Verdict`]; the orchestrator
//! decides nothing about scoring, only whether to record.

mod email;
mod generic;
mod moderation;
mod name;
mod phone;

pub use email::EmailValidator;
pub use generic::GenericValidator;
pub use moderation::ContentModerator;
pub use name::NameValidator;
pub use phone::PhoneValidator;

use vigil_core::ValidationResult;
use vigil_scoring::Breakdown;

/// A finished result and whether it belongs in the history.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub result: ValidationResult,
    pub recorded: bool,
}

impl Verdict {
    pub fn recorded(result: ValidationResult) -> Self {
        Self {
            result,
            recorded: true,
        }
    }

    /// Early rejections (malformed input) stay out of the history.
    pub fn unrecorded(result: ValidationResult) -> Self {
        Self {
            result,
            recorded: false,
        }
    }
}

/// Applied penalties become issues and applied bonuses become insights.
/// Pass `invert` for risk scores, where positive weights are the bad ones.
fn annotate(result: &mut ValidationResult, breakdown: &Breakdown, invert: bool) {
    for (label, weight) in &breakdown.applied {
        if (*weight < 0) != invert {
            result.push_issue(label.clone());
        } else {
            result.push_insight(label.clone());
        }
    }
}
