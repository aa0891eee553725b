//! Field validation for the portfolio form
//!
//! The same rules the backend enforces on the entity: bounded text lengths,
//! URL patterns for the image and the project link, and a mandatory owner.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::model::User;

pub const PROJECT_NAME_MIN_LENGTH: usize = 10;
pub const PROJECT_NAME_MAX_LENGTH: usize = 25;
pub const DESCRIPTION_MIN_LENGTH: usize = 10;
pub const DESCRIPTION_MAX_LENGTH: usize = 50;

pub const IMAGE_URL_PATTERN: &str = r"^https?://.*\.(jpg|jpeg|png|gif)$";
pub const LINK_PATTERN: &str = r"^https?://.*$";

static IMAGE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMAGE_URL_PATTERN).expect("image url pattern compiles"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINK_PATTERN).expect("link pattern compiles"));

/// Form fields that carry their own validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PortfolioField {
    Id,
    ProjectName,
    Description,
    ImageUrl,
    Link,
    User,
}

impl PortfolioField {
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioField::Id => "ID",
            PortfolioField::ProjectName => "Project Name",
            PortfolioField::Description => "Description",
            PortfolioField::ImageUrl => "Image Url",
            PortfolioField::Link => "Link",
            PortfolioField::User => "User",
        }
    }
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is missing
    Required,
    /// Shorter than the minimum length
    TooShort { min: usize, actual: usize },
    /// Longer than the maximum length
    TooLong { max: usize, actual: usize },
    /// Value does not match the expected pattern
    Pattern { pattern: &'static str },
    /// Selected option is not among the loaded choices
    UnknownOption { value: String },
    /// Identifier is not numeric
    InvalidId { value: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required."),
            ValidationError::TooShort { min, .. } => {
                write!(f, "This field is required to be at least {} characters.", min)
            }
            ValidationError::TooLong { max, .. } => {
                write!(f, "This field cannot be longer than {} characters.", max)
            }
            ValidationError::Pattern { pattern } => {
                write!(f, "This field should follow pattern for \"{}\".", pattern)
            }
            ValidationError::UnknownOption { value } => {
                write!(f, "'{}' is not one of the available choices.", value)
            }
            ValidationError::InvalidId { value } => {
                write!(f, "'{}' is not a valid identifier.", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Per-field validation outcome of a whole form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<PortfolioField, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn insert(&mut self, field: PortfolioField, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// Record the outcome of a single field check
    pub fn check(&mut self, field: PortfolioField, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.insert(field, error);
        }
    }

    pub fn get(&self, field: PortfolioField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Display message for a field, if it failed
    pub fn message(&self, field: PortfolioField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PortfolioField, &ValidationError)> {
        self.errors.iter()
    }
}

fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }

    // Counted in characters so non-ASCII names are not penalised
    let actual = value.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { min, actual });
    }
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}

fn validate_pattern(value: &str, re: &Regex, pattern: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    if !re.is_match(value) {
        return Err(ValidationError::Pattern { pattern });
    }
    Ok(())
}

pub fn validate_project_name(value: &str) -> Result<(), ValidationError> {
    validate_length(value, PROJECT_NAME_MIN_LENGTH, PROJECT_NAME_MAX_LENGTH)
}

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    validate_length(value, DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH)
}

pub fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    validate_pattern(value, &IMAGE_URL_RE, IMAGE_URL_PATTERN)
}

pub fn validate_link(value: &str) -> Result<(), ValidationError> {
    validate_pattern(value, &LINK_RE, LINK_PATTERN)
}

/// Resolve the selected owner id against the loaded user list
pub fn validate_user<'a>(selected: &str, users: &'a [User]) -> Result<&'a User, ValidationError> {
    let selected = selected.trim();
    if selected.is_empty() {
        return Err(ValidationError::Required);
    }
    users
        .iter()
        .find(|u| u.matches_id(selected))
        .ok_or_else(|| ValidationError::UnknownOption {
            value: selected.to_string(),
        })
}

/// Coerce the identifier field to a number
pub fn validate_id(value: &str) -> Result<i64, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    value.parse().map_err(|_| ValidationError::InvalidId {
        value: value.to_string(),
    })
}
