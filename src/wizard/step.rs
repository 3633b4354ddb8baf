use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum WizardStep {
    #[default]
    GeneralInfo = 1,
    ApplicationForm = 2,
    Review = 3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::GeneralInfo,
        WizardStep::ApplicationForm,
        WizardStep::Review,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::GeneralInfo => "General Information",
            WizardStep::ApplicationForm => "Application Form",
            WizardStep::Review => "Review & Post",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::GeneralInfo => Some(WizardStep::ApplicationForm),
            WizardStep::ApplicationForm => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// Saturates at the first step.
    pub fn previous(&self) -> WizardStep {
        match self {
            WizardStep::GeneralInfo | WizardStep::ApplicationForm => WizardStep::GeneralInfo,
            WizardStep::Review => WizardStep::ApplicationForm,
        }
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(WizardStep::GeneralInfo),
            2 => Ok(WizardStep::ApplicationForm),
            3 => Ok(WizardStep::Review),
            other => Err(Error::BadRequest(format!("Unknown wizard step {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_floors_at_first_step() {
        assert_eq!(WizardStep::GeneralInfo.previous(), WizardStep::GeneralInfo);
        assert_eq!(WizardStep::Review.previous(), WizardStep::ApplicationForm);
    }

    #[test]
    fn steps_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&WizardStep::Review).unwrap(), "3");
        let step: WizardStep = serde_json::from_str("2").unwrap();
        assert_eq!(step, WizardStep::ApplicationForm);
        assert!(serde_json::from_str::<WizardStep>("4").is_err());
    }
}
