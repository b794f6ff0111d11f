//! REST client for the catalog API.
//!
//! [`CatalogApi`] is what the view talks to; [`HttpCatalogApi`] implements
//! it over HTTP with [`reqwest`].

use async_trait::async_trait;
use catalog_core::project::{CreateProject, Project, UpdateProject};
use catalog_core::types::ProjectId;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Operations the client view needs from the server.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /api/projects[?category=]`
    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, ClientError>;

    /// `GET /api/projects/{id}`
    async fn get_project(&self, id: ProjectId) -> Result<Project, ClientError>;

    /// `POST /api/projects`
    async fn create_project(&self, input: &CreateProject) -> Result<Project, ClientError>;

    /// `PUT /api/projects/{id}`
    async fn update_project(
        &self,
        id: ProjectId,
        input: &UpdateProject,
    ) -> Result<Project, ClientError>;

    /// `DELETE /api/projects/{id}`
    async fn delete_project(&self, id: ProjectId) -> Result<(), ClientError>;

    /// `GET /api/categories`
    async fn list_categories(&self) -> Result<Vec<String>, ClientError>;
}

/// HTTP client for a catalog API instance.
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// Create a new API client.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`ClientError::Api`] with the status and
    /// body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, ClientError> {
        let mut request = self.client.get(self.url("/projects"));
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }
        let response = request.send().await?;
        Self::parse_response(response).await
    }

    async fn get_project(&self, id: ProjectId) -> Result<Project, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/projects/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn create_project(&self, input: &CreateProject) -> Result<Project, ClientError> {
        let response = self
            .client
            .post(self.url("/projects"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_project(
        &self,
        id: ProjectId,
        input: &UpdateProject,
    ) -> Result<Project, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/projects/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/projects/{id}")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<String>, ClientError> {
        let response = self.client.get(self.url("/categories")).send().await?;
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_rooted_under_api() {
        let api = HttpCatalogApi::new(&ClientConfig::new("http://localhost:3000/"));
        assert_eq!(api.url("/projects"), "http://localhost:3000/api/projects");
        assert_eq!(api.url("/projects/3"), "http://localhost:3000/api/projects/3");
    }
}
