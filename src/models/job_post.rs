use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::form_data;
use crate::error::{Error, Result};
use crate::models::custom_form::{default_registry, CustomFormAnswers, CustomFormQuestion};
use crate::models::option::SelectOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Temporary,
    Internship,
    Volunteer,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Temporary,
        JobType::Internship,
        JobType::Volunteer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Temporary => "Temporary",
            JobType::Internship => "Internship",
            JobType::Volunteer => "Volunteer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocationType {
    #[default]
    #[serde(rename = "On-site")]
    OnSite,
    Remote,
    Hybrid,
}

impl LocationType {
    pub const ALL: [LocationType; 3] = [
        LocationType::OnSite,
        LocationType::Remote,
        LocationType::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::OnSite => "On-site",
            LocationType::Remote => "Remote",
            LocationType::Hybrid => "Hybrid",
        }
    }

    /// Remote postings carry no country/state/city.
    pub fn requires_address(&self) -> bool {
        !matches!(self, LocationType::Remote)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Cad,
    Aud,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Inr,
        Currency::Cad,
        Currency::Aud,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PayPeriod {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    #[default]
    Annually,
}

impl PayPeriod {
    pub const ALL: [PayPeriod; 5] = [
        PayPeriod::Hourly,
        PayPeriod::Daily,
        PayPeriod::Weekly,
        PayPeriod::Monthly,
        PayPeriod::Annually,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriod::Hourly => "Hourly",
            PayPeriod::Daily => "Daily",
            PayPeriod::Weekly => "Weekly",
            PayPeriod::Monthly => "Monthly",
            PayPeriod::Annually => "Annually",
        }
    }
}

/// Names a draft field. Used as the key of the step validation error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    JobTitle,
    Department,
    JobType,
    LocationType,
    Country,
    State,
    City,
    SalaryMin,
    SalaryMax,
    Currency,
    Period,
    JobDescription,
    ExperienceLevel,
    EducationLevel,
    RequiredSkills,
    Deadline,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::JobTitle => "job_title",
            DraftField::Department => "department",
            DraftField::JobType => "job_type",
            DraftField::LocationType => "location_type",
            DraftField::Country => "country",
            DraftField::State => "state",
            DraftField::City => "city",
            DraftField::SalaryMin => "salary_min",
            DraftField::SalaryMax => "salary_max",
            DraftField::Currency => "currency",
            DraftField::Period => "period",
            DraftField::JobDescription => "job_description",
            DraftField::ExperienceLevel => "experience_level",
            DraftField::EducationLevel => "education_level",
            DraftField::RequiredSkills => "required_skills",
            DraftField::Deadline => "deadline",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar edit coming from one of the form tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftInput {
    JobTitle(String),
    JobType(JobType),
    LocationType(LocationType),
    SalaryMin(String),
    SalaryMax(String),
    Currency(Currency),
    Period(PayPeriod),
    JobDescription(String),
    ExperienceLevel(String),
    EducationLevel(String),
    Deadline(Option<NaiveDate>),
}

impl DraftInput {
    pub fn field(&self) -> DraftField {
        match self {
            DraftInput::JobTitle(_) => DraftField::JobTitle,
            DraftInput::JobType(_) => DraftField::JobType,
            DraftInput::LocationType(_) => DraftField::LocationType,
            DraftInput::SalaryMin(_) => DraftField::SalaryMin,
            DraftInput::SalaryMax(_) => DraftField::SalaryMax,
            DraftInput::Currency(_) => DraftField::Currency,
            DraftInput::Period(_) => DraftField::Period,
            DraftInput::JobDescription(_) => DraftField::JobDescription,
            DraftInput::ExperienceLevel(_) => DraftField::ExperienceLevel,
            DraftInput::EducationLevel(_) => DraftField::EducationLevel,
            DraftInput::Deadline(_) => DraftField::Deadline,
        }
    }
}

/// Dropdown-backed fields holding a [`SelectOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectField {
    Department,
    Country,
    State,
    City,
}

impl SelectField {
    pub fn field(&self) -> DraftField {
        match self {
            SelectField::Department => DraftField::Department,
            SelectField::Country => DraftField::Country,
            SelectField::State => DraftField::State,
            SelectField::City => DraftField::City,
        }
    }
}

/// The in-progress job post owned by one wizard session.
#[derive(Debug, Clone, Serialize)]
pub struct JobPostDraft {
    pub job_title: String,
    pub department: Option<SelectOption>,
    pub job_type: JobType,
    pub location_type: LocationType,
    country: Option<SelectOption>,
    state: Option<SelectOption>,
    city: Option<SelectOption>,
    pub salary_min: String,
    pub salary_max: String,
    pub currency: Currency,
    pub period: PayPeriod,
    pub job_description: String,
    pub experience_level: String,
    pub education_level: String,
    pub required_skills: Vec<SelectOption>,
    pub deadline: Option<NaiveDate>,
    screening_questions: Vec<String>,
    pub(crate) custom_form_questions: Vec<CustomFormQuestion>,
    pub(crate) custom_form_answers: CustomFormAnswers,
}

impl Default for JobPostDraft {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            department: None,
            job_type: JobType::default(),
            location_type: LocationType::default(),
            country: None,
            state: None,
            city: None,
            salary_min: String::new(),
            salary_max: String::new(),
            currency: Currency::default(),
            period: PayPeriod::default(),
            job_description: String::new(),
            experience_level: String::new(),
            education_level: String::new(),
            required_skills: Vec::new(),
            deadline: None,
            screening_questions: vec![String::new()],
            custom_form_questions: default_registry(),
            custom_form_answers: CustomFormAnswers::default(),
        }
    }
}

impl JobPostDraft {
    pub fn country(&self) -> Option<&SelectOption> {
        self.country.as_ref()
    }

    pub fn state(&self) -> Option<&SelectOption> {
        self.state.as_ref()
    }

    pub fn city(&self) -> Option<&SelectOption> {
        self.city.as_ref()
    }

    pub fn screening_questions(&self) -> &[String] {
        &self.screening_questions
    }

    pub fn custom_form_questions(&self) -> &[CustomFormQuestion] {
        &self.custom_form_questions
    }

    pub fn custom_form_answers(&self) -> &CustomFormAnswers {
        &self.custom_form_answers
    }

    pub fn apply_input(&mut self, input: DraftInput) {
        match input {
            DraftInput::JobTitle(value) => self.job_title = value,
            DraftInput::JobType(value) => self.job_type = value,
            DraftInput::LocationType(value) => self.location_type = value,
            DraftInput::SalaryMin(value) => self.salary_min = value,
            DraftInput::SalaryMax(value) => self.salary_max = value,
            DraftInput::Currency(value) => self.currency = value,
            DraftInput::Period(value) => self.period = value,
            DraftInput::JobDescription(value) => self.job_description = value,
            DraftInput::ExperienceLevel(value) => self.experience_level = value,
            DraftInput::EducationLevel(value) => self.education_level = value,
            DraftInput::Deadline(value) => self.deadline = value,
        }
    }

    /// Writes a dropdown value and returns the dependent fields that were
    /// cleared. A state must belong to the selected country and a city to
    /// the selected state.
    pub fn apply_select(
        &mut self,
        field: SelectField,
        option: Option<SelectOption>,
    ) -> Result<Vec<DraftField>> {
        match field {
            SelectField::Department => {
                self.department = option;
                Ok(Vec::new())
            }
            SelectField::Country => {
                self.set_country(option)?;
                Ok(vec![DraftField::State, DraftField::City])
            }
            SelectField::State => {
                self.set_state(option)?;
                Ok(vec![DraftField::City])
            }
            SelectField::City => {
                self.set_city(option)?;
                Ok(Vec::new())
            }
        }
    }

    pub fn set_country(&mut self, country: Option<SelectOption>) -> Result<()> {
        if let Some(option) = &country {
            if !form_data::has_country(&option.value) {
                return Err(Error::BadRequest(format!(
                    "Country '{}' is not listed",
                    option.value
                )));
            }
        }
        self.country = country;
        self.state = None;
        self.city = None;
        Ok(())
    }

    pub fn set_state(&mut self, state: Option<SelectOption>) -> Result<()> {
        if let Some(option) = &state {
            let country = self.country.as_ref().ok_or_else(|| {
                Error::BadRequest("Select a country before choosing a state".to_string())
            })?;
            if !form_data::has_state(&country.value, &option.value) {
                return Err(Error::BadRequest(format!(
                    "State '{}' is not listed for country '{}'",
                    option.value, country.value
                )));
            }
        }
        self.state = state;
        self.city = None;
        Ok(())
    }

    pub fn set_city(&mut self, city: Option<SelectOption>) -> Result<()> {
        if let Some(option) = &city {
            let (country, state) = match (&self.country, &self.state) {
                (Some(country), Some(state)) => (country, state),
                _ => {
                    return Err(Error::BadRequest(
                        "Select a state before choosing a city".to_string(),
                    ))
                }
            };
            if !form_data::has_city(&country.value, &state.value, &option.value) {
                return Err(Error::BadRequest(format!(
                    "City '{}' is not listed for state '{}'",
                    option.value, state.value
                )));
            }
        }
        self.city = city;
        Ok(())
    }

    pub fn add_screening_question(&mut self) -> usize {
        self.screening_questions.push(String::new());
        self.screening_questions.len() - 1
    }

    pub fn update_screening_question(&mut self, idx: usize, text: String) -> Result<()> {
        let slot = self
            .screening_questions
            .get_mut(idx)
            .ok_or_else(|| Error::BadRequest(format!("No screening question at index {}", idx)))?;
        *slot = text;
        Ok(())
    }

    /// The last remaining slot is cleared rather than removed.
    pub fn remove_screening_question(&mut self, idx: usize) -> Result<()> {
        if idx >= self.screening_questions.len() {
            return Err(Error::BadRequest(format!(
                "No screening question at index {}",
                idx
            )));
        }
        if self.screening_questions.len() == 1 {
            self.screening_questions[0].clear();
        } else {
            self.screening_questions.remove(idx);
        }
        Ok(())
    }
}
