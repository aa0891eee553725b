//! Create/edit form model
//!
//! The form keeps raw strings exactly as typed. Submitting validates every
//! field and then rebuilds the entity field by field from the form, taking
//! nothing implicitly from the previously loaded record.

use super::model::{Portfolio, User};
use super::validation::{
    FieldErrors, PortfolioField, ValidationError, validate_description, validate_id, validate_image_url,
    validate_link, validate_project_name, validate_user,
};

/// Create or edit, decided by whether the route carries an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// Mode from the raw `:id` route parameter
    pub fn from_route(id: Option<&str>) -> Result<Self, FieldErrors> {
        match id {
            None => Ok(FormMode::Create),
            Some(raw) => validate_id(raw).map(FormMode::Edit).map_err(|e| {
                let mut errors = FieldErrors::new();
                errors.insert(PortfolioField::Id, e);
                errors
            }),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

/// Raw form values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortfolioForm {
    pub id: String,
    pub project_name: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
    /// Selected owner id, empty when nothing is selected
    pub user_id: String,
}

impl PortfolioForm {
    /// Prefill from a loaded record
    pub fn from_entity(entity: &Portfolio) -> Self {
        Self {
            id: entity.id_label(),
            project_name: entity.project_name.clone(),
            description: entity.description.clone(),
            image_url: entity.image_url.clone(),
            link: entity.link.clone(),
            user_id: entity.user.as_ref().map(|u| u.id.clone()).unwrap_or_default(),
        }
    }

    pub fn validate(&self, mode: FormMode, users: &[User]) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !mode.is_new()
            && let Err(e) = validate_id(&self.id)
        {
            errors.insert(PortfolioField::Id, e);
        }
        errors.check(PortfolioField::ProjectName, validate_project_name(&self.project_name));
        errors.check(PortfolioField::Description, validate_description(&self.description));
        errors.check(PortfolioField::ImageUrl, validate_image_url(&self.image_url));
        errors.check(PortfolioField::Link, validate_link(&self.link));
        if let Err(e) = validate_user(&self.user_id, users) {
            errors.insert(PortfolioField::User, e);
        }
        errors
    }

    /// Build the entity to submit.
    ///
    /// Create never carries an identifier; edit uses the numeric form id, which
    /// must agree with the route.
    pub fn to_entity(&self, mode: FormMode, users: &[User]) -> Result<Portfolio, FieldErrors> {
        let errors = self.validate(mode, users);
        if !errors.is_empty() {
            return Err(errors);
        }

        let id = match mode {
            FormMode::Create => None,
            FormMode::Edit(route_id) => {
                let id = validate_id(&self.id).map_err(|e| single(PortfolioField::Id, e))?;
                if id != route_id {
                    return Err(single(
                        PortfolioField::Id,
                        ValidationError::InvalidId {
                            value: self.id.clone(),
                        },
                    ));
                }
                Some(id)
            }
        };
        let user = validate_user(&self.user_id, users)
            .map_err(|e| single(PortfolioField::User, e))?
            .clone();

        Ok(Portfolio {
            id,
            project_name: self.project_name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            link: self.link.clone(),
            user: Some(user),
        })
    }
}

fn single(field: PortfolioField, error: ValidationError) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field, error);
    errors
}
