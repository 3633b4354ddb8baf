use axum::{extract::Path, response::IntoResponse, Json};
use serde::Deserialize;

use crate::data::form_data;
use crate::error::Result;
use crate::models::job_post::{Currency, JobType, LocationType, PayPeriod};
use crate::models::option::SelectOption;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionKind {
    JobCategories,
    Skills,
    Currencies,
    Periods,
    JobTypes,
    LocationTypes,
    EducationLevels,
    ExperienceLevels,
    Genders,
    Countries,
}

fn labelled(values: impl IntoIterator<Item = &'static str>) -> Vec<SelectOption> {
    values
        .into_iter()
        .map(|v| SelectOption::new(v, v))
        .collect()
}

pub fn options_for(kind: OptionKind) -> Vec<SelectOption> {
    match kind {
        OptionKind::JobCategories => form_data::job_categories(),
        OptionKind::Skills => form_data::skills(),
        OptionKind::Currencies => labelled(Currency::ALL.iter().map(|c| c.as_str())),
        OptionKind::Periods => labelled(PayPeriod::ALL.iter().map(|p| p.as_str())),
        OptionKind::JobTypes => labelled(JobType::ALL.iter().map(|t| t.as_str())),
        OptionKind::LocationTypes => labelled(LocationType::ALL.iter().map(|l| l.as_str())),
        OptionKind::EducationLevels => form_data::education_levels(),
        OptionKind::ExperienceLevels => form_data::experience_levels(),
        OptionKind::Genders => form_data::genders(),
        OptionKind::Countries => form_data::countries(),
    }
}

#[utoipa::path(
    get,
    path = "/api/options/{kind}",
    params(
        ("kind" = String, Path, description = "Option list, e.g. job-categories or skills")
    ),
    responses(
        (status = 200, description = "Selectable options", body = Json<Vec<SelectOption>>),
        (status = 400, description = "Unknown option list")
    )
)]
#[axum::debug_handler]
pub async fn list_options(Path(kind): Path<OptionKind>) -> Result<impl IntoResponse> {
    Ok(Json(options_for(kind)))
}

#[utoipa::path(
    get,
    path = "/api/options/countries",
    responses(
        (status = 200, description = "Countries", body = Json<Vec<SelectOption>>)
    )
)]
#[axum::debug_handler]
pub async fn list_countries() -> Result<impl IntoResponse> {
    Ok(Json(form_data::countries()))
}

#[utoipa::path(
    get,
    path = "/api/options/countries/{country}/states",
    params(
        ("country" = String, Path, description = "Country code")
    ),
    responses(
        (status = 200, description = "States of the country, empty when unknown", body = Json<Vec<SelectOption>>)
    )
)]
#[axum::debug_handler]
pub async fn list_states(Path(country): Path<String>) -> Result<impl IntoResponse> {
    Ok(Json(form_data::states_of(&country)))
}

#[utoipa::path(
    get,
    path = "/api/options/countries/{country}/states/{state}/cities",
    params(
        ("country" = String, Path, description = "Country code"),
        ("state" = String, Path, description = "State code")
    ),
    responses(
        (status = 200, description = "Cities of the state, empty when unknown", body = Json<Vec<SelectOption>>)
    )
)]
#[axum::debug_handler]
pub async fn list_cities(
    Path((country, state)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    Ok(Json(form_data::cities_of(&country, &state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_backed_lists_use_wire_names() {
        let periods = options_for(OptionKind::Periods);
        assert_eq!(periods.len(), 5);
        assert_eq!(periods[4], SelectOption::new("Annually", "Annually"));

        let locations: Vec<_> = options_for(OptionKind::LocationTypes)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(locations, vec!["On-site", "Remote", "Hybrid"]);
    }

    #[test]
    fn kinds_parse_from_kebab_case() {
        let kind: OptionKind = serde_json::from_str("\"experience-levels\"").unwrap();
        assert!(matches!(kind, OptionKind::ExperienceLevels));
        assert!(serde_json::from_str::<OptionKind>("\"salaries\"").is_err());
    }
}
