use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Text,
    Email,
    Telephone,
    File,
    Textarea,
    Dropdown,
    Radio,
    Date,
    Education,
    Experience,
}

impl QuestionKind {
    /// Block kinds own a repeatable list instead of a scalar answer.
    pub fn is_block(&self) -> bool {
        matches!(self, QuestionKind::Education | QuestionKind::Experience)
    }
}

/// Stable keys of the applicant fields a job poster can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Name,
    Email,
    Phone,
    Resume,
    Gender,
    Address,
    Dob,
    CoverLetter,
    Education,
    Experience,
}

impl QuestionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Name => "name",
            QuestionId::Email => "email",
            QuestionId::Phone => "phone",
            QuestionId::Resume => "resume",
            QuestionId::Gender => "gender",
            QuestionId::Address => "address",
            QuestionId::Dob => "dob",
            QuestionId::CoverLetter => "cover_letter",
            QuestionId::Education => "education",
            QuestionId::Experience => "experience",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomFormQuestion {
    id: QuestionId,
    label: &'static str,
    #[serde(rename = "type")]
    kind: QuestionKind,
    enabled: bool,
}

impl CustomFormQuestion {
    const fn new(id: QuestionId, label: &'static str, kind: QuestionKind, enabled: bool) -> Self {
        Self {
            id,
            label,
            kind,
            enabled,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

/// The question registry in display order. Contact basics start enabled.
pub fn default_registry() -> Vec<CustomFormQuestion> {
    use QuestionId as Id;
    use QuestionKind as Kind;

    vec![
        CustomFormQuestion::new(Id::Name, "Full Name", Kind::Text, true),
        CustomFormQuestion::new(Id::Email, "Email Address", Kind::Email, true),
        CustomFormQuestion::new(Id::Phone, "Phone Number", Kind::Telephone, true),
        CustomFormQuestion::new(Id::Resume, "Resume", Kind::File, true),
        CustomFormQuestion::new(Id::Gender, "Gender", Kind::Radio, false),
        CustomFormQuestion::new(Id::Address, "Address", Kind::Textarea, false),
        CustomFormQuestion::new(Id::Dob, "Date of Birth", Kind::Date, false),
        CustomFormQuestion::new(Id::CoverLetter, "Cover Letter", Kind::File, false),
        CustomFormQuestion::new(Id::Education, "Education", Kind::Education, false),
        CustomFormQuestion::new(Id::Experience, "Work Experience", Kind::Experience, false),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    EducationLevel,
    InstitutionName,
    DegreeDetail,
    Cgpa,
    StartDate,
    Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_job_titles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    ExperienceLevel,
    YearsOfExperience,
    PreviousJobTitles,
    CompanyName,
}

/// One repeatable sub-record of a block-type answer. Blocks are addressed
/// by position only.
pub trait RepeatableBlock: Clone + Default {
    type Field: Copy;

    const QUESTION: QuestionId;

    fn set(&mut self, field: Self::Field, value: String);

    fn list(answer: &CustomAnswer) -> Option<&[Self]>;

    fn into_answer(blocks: Vec<Self>) -> CustomAnswer;
}

impl RepeatableBlock for EducationBlock {
    type Field = EducationField;

    const QUESTION: QuestionId = QuestionId::Education;

    fn set(&mut self, field: EducationField, value: String) {
        let slot = match field {
            EducationField::EducationLevel => &mut self.education_level,
            EducationField::InstitutionName => &mut self.institution_name,
            EducationField::DegreeDetail => &mut self.degree_detail,
            EducationField::Cgpa => &mut self.cgpa,
            EducationField::StartDate => &mut self.start_date,
            EducationField::Description => &mut self.description,
        };
        *slot = Some(value);
    }

    fn list(answer: &CustomAnswer) -> Option<&[Self]> {
        match answer {
            CustomAnswer::Education(blocks) => Some(blocks.as_slice()),
            _ => None,
        }
    }

    fn into_answer(blocks: Vec<Self>) -> CustomAnswer {
        CustomAnswer::Education(blocks)
    }
}

impl RepeatableBlock for ExperienceBlock {
    type Field = ExperienceField;

    const QUESTION: QuestionId = QuestionId::Experience;

    fn set(&mut self, field: ExperienceField, value: String) {
        let slot = match field {
            ExperienceField::ExperienceLevel => &mut self.experience_level,
            ExperienceField::YearsOfExperience => &mut self.years_of_experience,
            ExperienceField::PreviousJobTitles => &mut self.previous_job_titles,
            ExperienceField::CompanyName => &mut self.company_name,
        };
        *slot = Some(value);
    }

    fn list(answer: &CustomAnswer) -> Option<&[Self]> {
        match answer {
            CustomAnswer::Experience(blocks) => Some(blocks.as_slice()),
            _ => None,
        }
    }

    fn into_answer(blocks: Vec<Self>) -> CustomAnswer {
        CustomAnswer::Experience(blocks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CustomAnswer {
    Text(String),
    Education(Vec<EducationBlock>),
    Experience(Vec<ExperienceBlock>),
}

/// Answers keyed by question id. Block lists default to empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomFormAnswers(BTreeMap<QuestionId, CustomAnswer>);

impl CustomFormAnswers {
    pub fn get(&self, id: QuestionId) -> Option<&CustomAnswer> {
        self.0.get(&id)
    }

    pub fn text(&self, id: QuestionId) -> Option<&str> {
        match self.0.get(&id) {
            Some(CustomAnswer::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn blocks<B: RepeatableBlock>(&self) -> &[B] {
        self.0
            .get(&B::QUESTION)
            .and_then(B::list)
            .unwrap_or(&[])
    }

    pub(crate) fn set_text(&mut self, id: QuestionId, value: String) {
        self.0.insert(id, CustomAnswer::Text(value));
    }

    pub(crate) fn set_blocks<B: RepeatableBlock>(&mut self, blocks: Vec<B>) {
        self.0.insert(B::QUESTION, B::into_answer(blocks));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_and_identity_are_fixed() {
        let ids: Vec<_> = default_registry().iter().map(|q| q.id()).collect();
        assert_eq!(
            ids,
            vec![
                QuestionId::Name,
                QuestionId::Email,
                QuestionId::Phone,
                QuestionId::Resume,
                QuestionId::Gender,
                QuestionId::Address,
                QuestionId::Dob,
                QuestionId::CoverLetter,
                QuestionId::Education,
                QuestionId::Experience,
            ]
        );
        let kinds_with_blocks: Vec<_> = default_registry()
            .iter()
            .filter(|q| q.kind().is_block())
            .map(|q| q.id())
            .collect();
        assert_eq!(
            kinds_with_blocks,
            vec![QuestionId::Education, QuestionId::Experience]
        );
    }

    #[test]
    fn answers_serialize_as_plain_bag() {
        let mut answers = CustomFormAnswers::default();
        answers.set_text(QuestionId::Name, "Ada".to_string());
        answers.set_blocks(vec![EducationBlock {
            cgpa: Some("3.8".to_string()),
            ..Default::default()
        }]);

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["education"][0]["cgpa"], "3.8");
        assert!(json["education"][0].get("institution_name").is_none());
    }

    #[test]
    fn missing_block_list_reads_as_empty() {
        let answers = CustomFormAnswers::default();
        assert!(answers.blocks::<ExperienceBlock>().is_empty());
        assert!(answers.text(QuestionId::Email).is_none());
    }
}
