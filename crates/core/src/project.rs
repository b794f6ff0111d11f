//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::ProjectId;
use crate::validation::{validate_project_input, ValidationMode};

/// Entity name used in not-found errors.
pub const PROJECT_ENTITY: &str = "Project";

/// A catalog project as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category_id: String,
    /// Star rating 1-5. Unset until someone rates the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// DTO for updating an existing project. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl CreateProject {
    /// Validate a raw creation body and convert it into a DTO.
    ///
    /// Returns [`CoreError::Validation`] carrying every field error; nothing
    /// is converted unless the whole body is valid.
    pub fn from_input(input: Map<String, Value>) -> Result<Self, CoreError> {
        let outcome = validate_project_input(&input, ValidationMode::Full);
        if !outcome.valid {
            return Err(CoreError::Validation(outcome.errors));
        }
        serde_json::from_value(Value::Object(input))
            .map_err(|e| CoreError::Internal(format!("validated project input did not decode: {e}")))
    }
}

impl UpdateProject {
    /// Validate a raw partial-update body and convert it into a DTO.
    pub fn from_input(input: Map<String, Value>) -> Result<Self, CoreError> {
        let outcome = validate_project_input(&input, ValidationMode::Partial);
        if !outcome.valid {
            return Err(CoreError::Validation(outcome.errors));
        }
        serde_json::from_value(Value::Object(input))
            .map_err(|e| CoreError::Internal(format!("validated project update did not decode: {e}")))
    }

    /// Returns `true` if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.category_id.is_none()
            && self.rating.is_none()
    }
}

impl Project {
    /// Build a new record from a creation DTO, trimming text fields.
    pub fn new(id: ProjectId, input: CreateProject) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            image_url: input.image_url.trim().to_string(),
            category_id: input.category_id,
            rating: input.rating,
        }
    }

    /// Return a copy with the fields present in `update` overwritten.
    ///
    /// The id never changes. Text fields are trimmed; the category label is
    /// kept verbatim.
    pub fn with_update(&self, update: UpdateProject) -> Self {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            next.description = description.trim().to_string();
        }
        if let Some(image_url) = update.image_url {
            next.image_url = image_url.trim().to_string();
        }
        if let Some(category_id) = update.category_id {
            next.category_id = category_id;
        }
        if let Some(rating) = update.rating {
            next.rating = Some(rating);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::category::{CATEGORY_COMPUTING, CATEGORY_SPORTS};

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn sample() -> Project {
        Project::new(
            1,
            CreateProject {
                name: "  A  ".into(),
                description: " d ".into(),
                image_url: " https://x/y.png ".into(),
                category_id: CATEGORY_SPORTS.into(),
                rating: None,
            },
        )
    }

    #[test]
    fn test_new_trims_text_fields() {
        let project = sample();
        assert_eq!(project.name, "A");
        assert_eq!(project.description, "d");
        assert_eq!(project.image_url, "https://x/y.png");
        assert_eq!(project.category_id, CATEGORY_SPORTS);
    }

    #[test]
    fn test_serializes_camel_case_without_unset_rating() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["imageUrl"], "https://x/y.png");
        assert_eq!(value["categoryId"], CATEGORY_SPORTS);
        assert!(value.get("rating").is_none());
    }

    #[test]
    fn test_rating_only_update_preserves_other_fields() {
        let project = sample();
        let next = project.with_update(UpdateProject {
            rating: Some(3),
            ..Default::default()
        });
        assert_eq!(next.rating, Some(3));
        assert_eq!(next.name, project.name);
        assert_eq!(next.description, project.description);
        assert_eq!(next.image_url, project.image_url);
        assert_eq!(next.category_id, project.category_id);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let project = sample();
        assert_eq!(project.with_update(UpdateProject::default()), project);
    }

    #[test]
    fn test_update_trims_and_overwrites() {
        let next = sample().with_update(UpdateProject {
            name: Some("  B ".into()),
            category_id: Some(CATEGORY_COMPUTING.into()),
            ..Default::default()
        });
        assert_eq!(next.name, "B");
        assert_eq!(next.category_id, CATEGORY_COMPUTING);
        assert_eq!(next.id, 1);
    }

    #[test]
    fn test_create_from_input_reports_missing_name() {
        let input = object(json!({
            "description": "d",
            "imageUrl": "https://x/y.png",
            "categoryId": CATEGORY_SPORTS,
        }));
        let err = CreateProject::from_input(input).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref errors) if errors["name"] == "Required");
    }

    #[test]
    fn test_create_from_input_decodes_rating() {
        let input = object(json!({
            "name": "A",
            "description": "d",
            "imageUrl": "https://x/y.png",
            "categoryId": CATEGORY_SPORTS,
            "rating": 4,
        }));
        let dto = CreateProject::from_input(input).unwrap();
        assert_eq!(dto.rating, Some(4));
    }

    #[test]
    fn test_update_from_input_partial() {
        let dto = UpdateProject::from_input(object(json!({ "rating": 3 }))).unwrap();
        assert_eq!(dto.rating, Some(3));
        assert!(dto.name.is_none());
        assert!(!dto.is_empty());

        assert!(UpdateProject::from_input(Map::new()).unwrap().is_empty());
    }

    #[test]
    fn test_update_from_input_rejects_bad_category() {
        let err = UpdateProject::from_input(object(json!({ "categoryId": "invalid" }))).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref errors) if errors.contains_key("categoryId"));
    }
}
