use crate::extractors::PlantForm;
use entity::plants;
use serde::Serialize;
use std::{borrow::Cow, collections::BTreeMap};
use validator::{Validate, ValidationError};

/// Validation messages keyed by form field name.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlantField {
    Name,
    ScientificName,
    Description,
    CareInstructions,
    PhotoPath,
}

impl PlantField {
    const ALL: [PlantField; 5] = [
        PlantField::Name,
        PlantField::ScientificName,
        PlantField::Description,
        PlantField::CareInstructions,
        PlantField::PhotoPath,
    ];

    /// Struct field name as reported by `validator`.
    fn ident(self) -> &'static str {
        match self {
            PlantField::Name => "name",
            PlantField::ScientificName => "scientific_name",
            PlantField::Description => "description",
            PlantField::CareInstructions => "care_instructions",
            PlantField::PhotoPath => "photo_path",
        }
    }

    pub fn form_name(self) -> &'static str {
        match self {
            PlantField::Name => "name",
            PlantField::ScientificName => "scientificName",
            PlantField::Description => "description",
            PlantField::CareInstructions => "careInstructions",
            PlantField::PhotoPath => "photoPath",
        }
    }

    fn from_ident(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.ident() == ident)
    }
}

/// Plant values as submitted by a client, echoed back when a form has to be shown again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlantInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[validate(
        custom(function = "not_blank", message = "The name field is required."),
        length(max = 100, message = "The name must be at most 100 characters long.")
    )]
    pub name: String,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub care_instructions: Option<String>,
    #[validate(required(message = "The photo path field is required."))]
    pub photo_path: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

impl PlantInput {
    /// Builds the input from a submitted form. `photo_path` is left empty, the handler owns it.
    pub fn from_form(form: &PlantForm) -> Self {
        Self {
            id: form.id.as_deref().and_then(|id| id.trim().parse().ok()),
            name: form.name.as_deref().unwrap_or_default().trim().to_owned(),
            scientific_name: optional_text(form.scientific_name.as_deref()),
            description: optional_text(form.description.as_deref()),
            care_instructions: optional_text(form.care_instructions.as_deref()),
            photo_path: None,
        }
    }
}

impl From<plants::Model> for PlantInput {
    fn from(model: plants::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            scientific_name: model.scientific_name,
            description: model.description,
            care_instructions: model.care_instructions,
            photo_path: model.photo_path,
        }
    }
}

/// Checks `plant` against its validation rules, ignoring the fields in `excluded`.
pub fn validate_plant(plant: &PlantInput, excluded: &[PlantField]) -> Result<(), FieldErrors> {
    let Err(errors) = plant.validate() else {
        return Ok(());
    };

    let mut field_errors = FieldErrors::new();

    for (ident, errors) in errors.field_errors() {
        let Some(field) = PlantField::from_ident(&ident.to_string()) else {
            continue;
        };

        if excluded.contains(&field) {
            continue;
        }

        field_errors
            .entry(field.form_name())
            .or_default()
            .extend(errors.iter().map(|error| {
                error
                    .message
                    .clone()
                    .unwrap_or(Cow::Borrowed("is invalid"))
                    .into_owned()
            }));
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(field_errors)
    }
}

/// The data behind a create or edit form.
#[derive(Debug, Default, Serialize)]
pub struct FormView {
    pub plant: PlantInput,
    pub errors: FieldErrors,
}

impl FormView {
    pub fn new(plant: PlantInput) -> Self {
        Self {
            plant,
            errors: FieldErrors::new(),
        }
    }

    pub fn with_errors(plant: PlantInput, errors: FieldErrors) -> Self {
        Self { plant, errors }
    }
}
