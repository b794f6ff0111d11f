//! Create and edit form models and the request payloads built from them.

use catalog_core::project::{CreateProject, Project, UpdateProject};
use catalog_core::types::ProjectId;

use crate::messages;

/// Image used when a project is saved without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/seed/placeholder/600/400";

/// Client-side form errors, shown inline in the modal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("name, description and category are required")]
    MissingRequired,
}

impl FormError {
    /// Localized message for the modal.
    pub fn message(&self) -> &'static str {
        match self {
            FormError::MissingRequired => messages::MISSING_CREATE_FIELDS,
        }
    }
}

/// Values of the create modal.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Raw bytes of an uploaded image file, if one was picked.
    pub image: Option<Vec<u8>>,
}

impl CreateForm {
    /// Check the fields the server would reject before any upload work.
    pub fn check(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err(FormError::MissingRequired);
        }
        Ok(())
    }

    /// Build the creation payload. `image_url` is the prepared upload, if
    /// any; otherwise the placeholder is used.
    pub fn to_payload(&self, image_url: Option<String>) -> Result<CreateProject, FormError> {
        self.check()?;
        Ok(CreateProject {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: image_url.unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            category_id: self.category.clone(),
            rating: None,
        })
    }
}

/// Values of the edit modal.
#[derive(Debug, Clone, Default)]
pub struct EditForm {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Image URL of the record being edited, for the fallback decision.
    pub current_image_url: String,
    /// Raw bytes of a replacement image, if one was picked.
    pub image: Option<Vec<u8>>,
}

impl EditForm {
    /// Pre-fill from a cached record.
    pub fn prefill(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            description: project.description.clone(),
            category: project.category_id.clone(),
            current_image_url: project.image_url.clone(),
            image: None,
        }
    }

    /// Build the partial update.
    ///
    /// Blank fields are left out so the server keeps its value. A prepared
    /// upload replaces the image; with no upload and no current image the
    /// placeholder is sent.
    pub fn to_payload(&self, image_url: Option<String>) -> UpdateProject {
        UpdateProject {
            name: non_blank(&self.name),
            description: non_blank(&self.description),
            category_id: non_blank(&self.category),
            image_url: match image_url {
                Some(url) => Some(url),
                None if self.current_image_url.trim().is_empty() => {
                    Some(PLACEHOLDER_IMAGE_URL.to_string())
                }
                None => None,
            },
            rating: None,
        }
    }
}

/// Rating-only partial update from the details screen.
pub fn rating_payload(rating: u8) -> UpdateProject {
    UpdateProject {
        rating: Some(rating),
        ..Default::default()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
