//! Dynamic custom form assembled from the toggled question registry.

use serde::Serialize;

use crate::data::form_data;
use crate::error::{Error, Result};
use crate::models::custom_form::{
    EducationBlock, EducationField, ExperienceBlock, ExperienceField, QuestionId, QuestionKind,
    RepeatableBlock,
};
use crate::models::job_post::JobPostDraft;
use crate::models::option::SelectOption;

/// Edits the custom-form answers of a draft.
pub struct CustomFormBuilder<'a> {
    draft: &'a mut JobPostDraft,
}

impl<'a> CustomFormBuilder<'a> {
    pub fn new(draft: &'a mut JobPostDraft) -> Self {
        Self { draft }
    }

    pub fn set_answer(&mut self, id: QuestionId, value: String) -> Result<()> {
        let kind = self
            .draft
            .custom_form_questions
            .iter()
            .find(|q| q.id() == id)
            .map(|q| q.kind())
            .ok_or_else(|| Error::NotFound(format!("Unknown question '{}'", id.as_str())))?;
        if kind.is_block() {
            return Err(Error::BadRequest(format!(
                "Question '{}' takes repeatable entries, not a single value",
                id.as_str()
            )));
        }
        self.draft.custom_form_answers.set_text(id, value);
        Ok(())
    }

    pub fn add_education_block(&mut self) -> usize {
        self.add_block::<EducationBlock>()
    }

    pub fn add_experience_block(&mut self) -> usize {
        self.add_block::<ExperienceBlock>()
    }

    pub fn handle_education_change(
        &mut self,
        idx: usize,
        field: EducationField,
        value: String,
    ) -> Result<()> {
        self.update_block::<EducationBlock>(idx, field, value)
    }

    pub fn handle_experience_change(
        &mut self,
        idx: usize,
        field: ExperienceField,
        value: String,
    ) -> Result<()> {
        self.update_block::<ExperienceBlock>(idx, field, value)
    }

    /// Appends an empty block and returns its index.
    pub fn add_block<B: RepeatableBlock>(&mut self) -> usize {
        let mut blocks = self.draft.custom_form_answers.blocks::<B>().to_vec();
        blocks.push(B::default());
        let idx = blocks.len() - 1;
        self.draft.custom_form_answers.set_blocks(blocks);
        idx
    }

    /// Clones the list, merges the field into block `idx` and writes the
    /// whole list back. Index 0 on an empty list materializes the blank
    /// block the preview shows.
    pub fn update_block<B: RepeatableBlock>(
        &mut self,
        idx: usize,
        field: B::Field,
        value: String,
    ) -> Result<()> {
        let mut blocks = self.draft.custom_form_answers.blocks::<B>().to_vec();
        if blocks.is_empty() && idx == 0 {
            blocks.push(B::default());
        }
        let block = blocks.get_mut(idx).ok_or_else(|| {
            Error::BadRequest(format!(
                "No {} entry at index {}",
                B::QUESTION.as_str(),
                idx
            ))
        })?;
        block.set(field, value);
        self.draft.custom_form_answers.set_blocks(blocks);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomFormPreview {
    pub fields: Vec<PreviewField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewField {
    pub id: QuestionId,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub input: PreviewInput,
}

/// `saved` counts blocks actually stored; a block-type question with none
/// stored still renders one blank block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum PreviewInput {
    Scalar {
        value: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        options: Vec<SelectOption>,
    },
    Education {
        blocks: Vec<EducationBlock>,
        saved: usize,
        education_levels: Vec<SelectOption>,
    },
    Experience {
        blocks: Vec<ExperienceBlock>,
        saved: usize,
        experience_levels: Vec<SelectOption>,
    },
}

fn rendered_blocks<B: RepeatableBlock>(draft: &JobPostDraft) -> (Vec<B>, usize) {
    let stored = draft.custom_form_answers.blocks::<B>();
    if stored.is_empty() {
        (vec![B::default()], 0)
    } else {
        (stored.to_vec(), stored.len())
    }
}

pub fn preview(draft: &JobPostDraft) -> CustomFormPreview {
    let fields = draft
        .custom_form_questions
        .iter()
        .filter(|q| q.enabled())
        .map(|q| {
            let input = match q.kind() {
                QuestionKind::Education => {
                    let (blocks, saved) = rendered_blocks::<EducationBlock>(draft);
                    PreviewInput::Education {
                        blocks,
                        saved,
                        education_levels: form_data::education_levels(),
                    }
                }
                QuestionKind::Experience => {
                    let (blocks, saved) = rendered_blocks::<ExperienceBlock>(draft);
                    PreviewInput::Experience {
                        blocks,
                        saved,
                        experience_levels: form_data::experience_levels(),
                    }
                }
                _ => PreviewInput::Scalar {
                    value: draft
                        .custom_form_answers
                        .text(q.id())
                        .unwrap_or_default()
                        .to_string(),
                    options: if q.id() == QuestionId::Gender {
                        form_data::genders()
                    } else {
                        Vec::new()
                    },
                },
            };
            PreviewField {
                id: q.id(),
                label: q.label(),
                kind: q.kind(),
                input,
            }
        })
        .collect();

    CustomFormPreview { fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(enabled: &[QuestionId]) -> JobPostDraft {
        let mut draft = JobPostDraft::default();
        for question in draft.custom_form_questions.iter_mut() {
            if question.enabled() != enabled.contains(&question.id()) {
                question.toggle();
            }
        }
        draft
    }

    #[test]
    fn adding_two_education_blocks_gives_two_empty_entries() {
        let mut draft = JobPostDraft::default();
        let mut builder = CustomFormBuilder::new(&mut draft);
        assert_eq!(builder.add_education_block(), 0);
        assert_eq!(builder.add_education_block(), 1);

        assert_eq!(
            draft.custom_form_answers().blocks::<EducationBlock>(),
            &[EducationBlock::default(), EducationBlock::default()]
        );
    }

    #[test]
    fn first_edit_materializes_the_implicit_block() {
        let mut draft = JobPostDraft::default();
        CustomFormBuilder::new(&mut draft)
            .handle_education_change(0, EducationField::Cgpa, "3.8".to_string())
            .unwrap();

        let blocks = draft.custom_form_answers().blocks::<EducationBlock>();
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            EducationBlock {
                cgpa: Some("3.8".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn edits_merge_into_the_addressed_block_only() {
        let mut draft = JobPostDraft::default();
        let mut builder = CustomFormBuilder::new(&mut draft);
        builder.add_experience_block();
        builder.add_experience_block();
        builder
            .handle_experience_change(1, ExperienceField::CompanyName, "Acme".to_string())
            .unwrap();
        builder
            .handle_experience_change(1, ExperienceField::YearsOfExperience, "4".to_string())
            .unwrap();

        let blocks = draft.custom_form_answers().blocks::<ExperienceBlock>();
        assert_eq!(blocks[0], ExperienceBlock::default());
        assert_eq!(blocks[1].company_name.as_deref(), Some("Acme"));
        assert_eq!(blocks[1].years_of_experience.as_deref(), Some("4"));
    }

    #[test]
    fn out_of_range_block_edit_is_rejected() {
        let mut draft = JobPostDraft::default();
        let err = CustomFormBuilder::new(&mut draft)
            .handle_education_change(2, EducationField::Cgpa, "3.1".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert!(draft.custom_form_answers().is_empty());
    }

    #[test]
    fn block_questions_reject_scalar_answers() {
        let mut draft = JobPostDraft::default();
        let mut builder = CustomFormBuilder::new(&mut draft);
        assert!(builder
            .set_answer(QuestionId::Experience, "lots".to_string())
            .is_err());
        builder
            .set_answer(QuestionId::Name, "Ada Lovelace".to_string())
            .unwrap();
        assert_eq!(
            draft.custom_form_answers().text(QuestionId::Name),
            Some("Ada Lovelace")
        );
    }

    #[test]
    fn preview_renders_enabled_questions_in_registry_order() {
        let draft = draft_with(&[QuestionId::Experience, QuestionId::Name, QuestionId::Gender]);
        let ids: Vec<_> = preview(&draft).fields.iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            vec![QuestionId::Name, QuestionId::Gender, QuestionId::Experience]
        );
    }

    #[test]
    fn enabled_block_question_without_entries_shows_one_unsaved_block() {
        let draft = draft_with(&[QuestionId::Education]);
        let rendered = preview(&draft);

        match &rendered.fields[0].input {
            PreviewInput::Education { blocks, saved, .. } => {
                assert_eq!(blocks.len(), 1);
                assert_eq!(*saved, 0);
            }
            other => panic!("unexpected input {:?}", other),
        }
        assert!(draft.custom_form_answers().is_empty());
    }
}
