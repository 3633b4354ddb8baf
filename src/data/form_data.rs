//! Static lookup tables behind the job-post dropdowns.
//!
//! Locations form a fixed country -> state -> city adjacency. Nothing here is
//! mutated at runtime.

use crate::models::option::SelectOption;

pub struct CountryEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub states: &'static [StateEntry],
}

pub struct StateEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

pub const JOB_CATEGORIES: &[(&str, &str)] = &[
    ("engineering", "Engineering"),
    ("it", "IT"),
    ("design", "Design"),
    ("product", "Product Management"),
    ("marketing", "Marketing"),
    ("sales", "Sales"),
    ("finance", "Finance"),
    ("hr", "Human Resources"),
    ("operations", "Operations"),
    ("customer_support", "Customer Support"),
    ("legal", "Legal"),
];

pub const SKILLS: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("react", "React"),
    ("node", "Node.js"),
    ("python", "Python"),
    ("java", "Java"),
    ("rust", "Rust"),
    ("go", "Go"),
    ("sql", "SQL"),
    ("aws", "AWS"),
    ("docker", "Docker"),
    ("figma", "Figma"),
    ("communication", "Communication"),
    ("leadership", "Leadership"),
    ("accounting", "Accounting"),
];

pub const EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("high_school", "High School"),
    ("diploma", "Diploma"),
    ("bachelors", "Bachelor's Degree"),
    ("masters", "Master's Degree"),
    ("doctorate", "Doctorate"),
];

pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("entry", "Entry Level"),
    ("junior", "Junior"),
    ("mid", "Mid Level"),
    ("senior", "Senior"),
    ("lead", "Lead"),
    ("executive", "Executive"),
];

pub const GENDERS: &[(&str, &str)] = &[
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
    ("prefer_not_to_say", "Prefer not to say"),
];

pub const COUNTRIES: &[CountryEntry] = &[
    CountryEntry {
        code: "US",
        name: "United States",
        states: &[
            StateEntry {
                code: "CA",
                name: "California",
                cities: &["Los Angeles", "San Francisco", "San Diego"],
            },
            StateEntry {
                code: "NY",
                name: "New York",
                cities: &["New York City", "Buffalo", "Albany"],
            },
            StateEntry {
                code: "TX",
                name: "Texas",
                cities: &["Austin", "Houston", "Dallas"],
            },
        ],
    },
    CountryEntry {
        code: "IN",
        name: "India",
        states: &[
            StateEntry {
                code: "MH",
                name: "Maharashtra",
                cities: &["Mumbai", "Pune", "Nagpur"],
            },
            StateEntry {
                code: "KA",
                name: "Karnataka",
                cities: &["Bengaluru", "Mysuru", "Mangaluru"],
            },
            StateEntry {
                code: "DL",
                name: "Delhi",
                cities: &["New Delhi"],
            },
        ],
    },
    CountryEntry {
        code: "GB",
        name: "United Kingdom",
        states: &[
            StateEntry {
                code: "ENG",
                name: "England",
                cities: &["London", "Manchester", "Birmingham"],
            },
            StateEntry {
                code: "SCT",
                name: "Scotland",
                cities: &["Edinburgh", "Glasgow"],
            },
        ],
    },
    CountryEntry {
        code: "CA",
        name: "Canada",
        states: &[
            StateEntry {
                code: "ON",
                name: "Ontario",
                cities: &["Toronto", "Ottawa"],
            },
            StateEntry {
                code: "BC",
                name: "British Columbia",
                cities: &["Vancouver", "Victoria"],
            },
        ],
    },
];

fn to_options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

pub fn job_categories() -> Vec<SelectOption> {
    to_options(JOB_CATEGORIES)
}

pub fn skills() -> Vec<SelectOption> {
    to_options(SKILLS)
}

pub fn education_levels() -> Vec<SelectOption> {
    to_options(EDUCATION_LEVELS)
}

pub fn experience_levels() -> Vec<SelectOption> {
    to_options(EXPERIENCE_LEVELS)
}

pub fn genders() -> Vec<SelectOption> {
    to_options(GENDERS)
}

pub fn countries() -> Vec<SelectOption> {
    COUNTRIES
        .iter()
        .map(|c| SelectOption::new(c.code, c.name))
        .collect()
}

fn find_country(country: &str) -> Option<&'static CountryEntry> {
    COUNTRIES.iter().find(|c| c.code == country)
}

fn find_state(country: &str, state: &str) -> Option<&'static StateEntry> {
    find_country(country)?
        .states
        .iter()
        .find(|s| s.code == state)
}

/// Unknown countries have no states.
pub fn states_of(country: &str) -> Vec<SelectOption> {
    find_country(country)
        .map(|c| {
            c.states
                .iter()
                .map(|s| SelectOption::new(s.code, s.name))
                .collect()
        })
        .unwrap_or_default()
}

pub fn cities_of(country: &str, state: &str) -> Vec<SelectOption> {
    find_state(country, state)
        .map(|s| {
            s.cities
                .iter()
                .map(|city| SelectOption::new(*city, *city))
                .collect()
        })
        .unwrap_or_default()
}

pub fn has_country(country: &str) -> bool {
    find_country(country).is_some()
}

pub fn has_state(country: &str, state: &str) -> bool {
    find_state(country, state).is_some()
}

pub fn has_city(country: &str, state: &str, city: &str) -> bool {
    find_state(country, state)
        .map(|s| s.cities.iter().any(|c| *c == city))
        .unwrap_or(false)
}
