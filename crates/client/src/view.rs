//! The client view: screen state, navigation and user actions.
//!
//! [`ClientView`] owns everything the page shows. Every action is one
//! `async` call that updates state only after the network call finishes.
//! Failures are logged with their diagnostic detail and surfaced as a
//! localized notice; nothing here returns an error to the caller.

use catalog_core::project::Project;
use catalog_core::types::ProjectId;

use crate::api::CatalogApi;
use crate::cache::ProjectCache;
use crate::error::ClientError;
use crate::forms::{rating_payload, CreateForm, EditForm};
use crate::grid::{visible_projects, GridQuery, SortOrder};
use crate::messages;
use crate::modal::ModalController;
use crate::render::{render_details, render_grid};
use crate::route::Route;
use crate::upload::prepare_upload;

/// Blocking yes/no prompt shown before destructive or mutating calls.
pub trait Dialogs {
    /// Ask the user to confirm. `false` means "do nothing".
    fn confirm(&self, message: &str) -> bool;
}

/// The client view over a catalog API.
pub struct ClientView<A, D> {
    api: A,
    dialogs: D,
    route: Route,
    query: GridQuery,
    cache: ProjectCache,
    /// The cache no longer matches `query` because the last list fetch failed.
    listing_stale: bool,
    categories: Vec<String>,
    details: Option<Project>,
    create_modal: ModalController,
    edit_modal: ModalController,
    edit_form: Option<EditForm>,
    notice: Option<String>,
    html: String,
}

impl<A: CatalogApi, D: Dialogs> ClientView<A, D> {
    pub fn new(api: A, dialogs: D) -> Self {
        Self {
            api,
            dialogs,
            route: Route::Grid,
            query: GridQuery::default(),
            cache: ProjectCache::new(),
            listing_stale: false,
            categories: Vec::new(),
            details: None,
            create_modal: ModalController::new(),
            edit_modal: ModalController::new(),
            edit_form: None,
            notice: None,
            html: String::new(),
        }
    }

    // ---- accessors ----

    pub fn route(&self) -> Route {
        self.route
    }

    /// Fragment the address bar should show for the current route.
    pub fn fragment(&self) -> String {
        self.route.fragment()
    }

    pub fn query(&self) -> &GridQuery {
        &self.query
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn cache(&self) -> &ProjectCache {
        &self.cache
    }

    /// The project on the details screen, if loaded.
    pub fn details(&self) -> Option<&Project> {
        self.details.as_ref()
    }

    pub fn create_modal(&self) -> &ModalController {
        &self.create_modal
    }

    pub fn edit_modal(&self) -> &ModalController {
        &self.edit_modal
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.edit_form.as_ref()
    }

    /// Current page-level notice (load/delete/rating failures).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Last rendered HTML for the current screen.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Projects the grid currently shows, searched and sorted. Empty after
    /// a failed fetch.
    pub fn visible(&self) -> Vec<&Project> {
        if self.listing_stale {
            return Vec::new();
        }
        visible_projects(self.cache.projects(), &self.query)
    }

    // ---- navigation ----

    /// Initial load: fetch categories, then show the screen for `fragment`.
    pub async fn start(&mut self, fragment: &str) {
        match self.api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(err) => tracing::error!(error = %err, "Failed to load categories"),
        }
        self.navigate(fragment).await;
    }

    /// React to a fragment change.
    pub async fn navigate(&mut self, fragment: &str) {
        self.route = Route::parse(fragment);
        match self.route {
            Route::Grid => {
                self.details = None;
                self.refresh_grid().await;
            }
            Route::Details(id) => self.load_details(id).await,
        }
    }

    /// Card click.
    pub async fn open_card(&mut self, id: ProjectId) {
        self.navigate(&Route::Details(id).fragment()).await;
    }

    /// Close button on the details screen.
    pub async fn close_details(&mut self) {
        self.navigate(&Route::Grid.fragment()).await;
    }

    /// Escape closes the innermost thing that is open: a modal that is not
    /// mid-submission, otherwise the details screen.
    pub async fn press_escape(&mut self) {
        if self.create_modal.is_open() {
            self.create_modal.close();
        } else if self.edit_modal.is_open() {
            if self.edit_modal.close() {
                self.edit_form = None;
            }
        } else if matches!(self.route, Route::Details(_)) {
            self.close_details().await;
        }
    }

    // ---- grid controls ----

    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.refresh_grid().await;
    }

    pub async fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
        self.refresh_grid().await;
    }

    pub async fn set_category(&mut self, category: Option<String>) {
        self.query.category = category;
        self.refresh_grid().await;
    }

    /// Re-fetch the (category-filtered) list and re-render the grid.
    pub async fn refresh_grid(&mut self) {
        match self.api.list_projects(self.query.category.as_deref()).await {
            Ok(projects) => {
                self.cache.replace_all(projects);
                self.listing_stale = false;
                self.notice = None;
            }
            Err(err) => {
                self.listing_stale = true;
                self.report(err, "Failed to load projects", messages::LOAD_FAILED);
            }
        }
        if self.route == Route::Grid {
            self.render();
        }
    }

    // ---- create ----

    pub fn open_create(&mut self) {
        self.create_modal.open();
    }

    pub fn cancel_create(&mut self) {
        self.create_modal.close();
    }

    pub async fn submit_create(&mut self, form: CreateForm) {
        if let Err(err) = form.check() {
            self.create_modal.reject(err.message());
            return;
        }
        if let Err(err) = self.create_modal.begin_submit() {
            tracing::warn!(error = %err, "Ignoring create submission");
            return;
        }

        let image_url = match form.image.as_deref().map(prepare_upload).transpose() {
            Ok(url) => url,
            Err(err) => {
                tracing::error!(error = %err, "Failed to prepare upload");
                self.create_modal.fail(messages::IMAGE_FAILED);
                return;
            }
        };
        let payload = match form.to_payload(image_url) {
            Ok(payload) => payload,
            Err(err) => {
                self.create_modal.fail(err.message());
                return;
            }
        };

        match self.api.create_project(&payload).await {
            Ok(project) => {
                tracing::info!(id = project.id, "Project created");
                self.create_modal.complete();
                self.refresh_grid().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create project");
                self.create_modal.fail(messages::CREATE_FAILED);
            }
        }
    }

    // ---- edit ----

    /// Open the edit modal pre-filled from the cache (or the loaded
    /// details record).
    pub fn open_edit(&mut self, id: ProjectId) -> Option<&EditForm> {
        let form = self
            .cache
            .get(id)
            .or_else(|| self.details.as_ref().filter(|p| p.id == id))
            .map(EditForm::prefill);
        let Some(form) = form else {
            self.notice = Some(messages::PROJECT_NOT_FOUND.to_string());
            self.render();
            return None;
        };

        self.edit_form = Some(form);
        self.edit_modal.open();
        self.edit_form.as_ref()
    }

    pub fn cancel_edit(&mut self) {
        if self.edit_modal.close() {
            self.edit_form = None;
        }
    }

    pub async fn submit_edit(&mut self, form: EditForm) {
        if !self.dialogs.confirm(messages::CONFIRM_UPDATE) {
            return;
        }
        if let Err(err) = self.edit_modal.begin_submit() {
            tracing::warn!(error = %err, "Ignoring edit submission");
            return;
        }

        let image_url = match form.image.as_deref().map(prepare_upload).transpose() {
            Ok(url) => url,
            Err(err) => {
                tracing::error!(error = %err, "Failed to prepare upload");
                self.edit_modal.fail(messages::IMAGE_FAILED);
                return;
            }
        };
        let payload = form.to_payload(image_url);

        match self.api.update_project(form.id, &payload).await {
            Ok(project) => {
                tracing::info!(id = project.id, "Project updated");
                self.edit_modal.complete();
                self.edit_form = None;
                self.apply_updated(project).await;
            }
            Err(err) => {
                tracing::error!(error = %err, id = form.id, "Failed to update project");
                self.edit_modal.fail(messages::UPDATE_FAILED);
            }
        }
    }

    // ---- delete ----

    pub async fn delete_project(&mut self, id: ProjectId) {
        if !self.dialogs.confirm(messages::CONFIRM_DELETE) {
            return;
        }

        match self.api.delete_project(id).await {
            Ok(()) => {
                tracing::info!(id, "Project deleted");
                self.cache.remove(id);
                if self.route == Route::Details(id) {
                    self.route = Route::Grid;
                    self.details = None;
                }
                self.refresh_grid().await;
            }
            Err(err) => {
                self.report(err, "Failed to delete project", messages::DELETE_FAILED);
                self.render();
            }
        }
    }

    // ---- rating ----

    /// Confirm and send a rating-only update for the project on the details
    /// screen.
    pub async fn submit_rating(&mut self, rating: u8) {
        let Route::Details(id) = self.route else {
            return;
        };
        if !self.dialogs.confirm(messages::CONFIRM_RATING) {
            return;
        }

        match self.api.update_project(id, &rating_payload(rating)).await {
            Ok(project) => {
                tracing::info!(id, rating, "Project rated");
                self.notice = None;
                self.apply_updated(project).await;
            }
            Err(err) => {
                self.report(err, "Failed to update rating", messages::RATING_FAILED);
                self.render();
            }
        }
    }

    // ---- private helpers ----

    async fn load_details(&mut self, id: ProjectId) {
        match self.api.get_project(id).await {
            Ok(project) => {
                self.cache.upsert(project.clone());
                self.details = Some(project);
                self.notice = None;
            }
            Err(err) => {
                self.details = None;
                let message = if err.is_not_found() {
                    messages::PROJECT_NOT_FOUND
                } else {
                    messages::LOAD_FAILED
                };
                self.report(err, "Failed to load project", message);
            }
        }
        self.render();
    }

    async fn apply_updated(&mut self, project: Project) {
        if self.route == Route::Details(project.id) {
            self.cache.upsert(project.clone());
            self.details = Some(project);
            self.render();
        } else {
            self.refresh_grid().await;
        }
    }

    fn report(&mut self, err: ClientError, context: &'static str, message: &str) {
        tracing::error!(error = %err, "{context}");
        self.notice = Some(message.to_string());
    }

    fn render(&mut self) {
        let notice = self.notice.as_deref();
        self.html = match (&self.route, &self.details) {
            (Route::Details(_), Some(project)) => render_details(project, notice),
            (Route::Details(_), None) => render_grid(std::iter::empty(), notice),
            (Route::Grid, _) if self.listing_stale => render_grid(std::iter::empty(), notice),
            (Route::Grid, _) => render_grid(
                visible_projects(self.cache.projects(), &self.query),
                notice,
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use catalog_core::project::{CreateProject, UpdateProject};

    use super::*;
    use crate::forms::PLACEHOLDER_IMAGE_URL;
    use crate::modal::ModalState;

    #[derive(Default)]
    struct FakeState {
        projects: Vec<Project>,
        next_id: ProjectId,
        calls: Vec<String>,
        fail: bool,
        last_update: Option<UpdateProject>,
    }

    #[derive(Clone, Default)]
    struct FakeApi {
        inner: Arc<Mutex<FakeState>>,
    }

    impl FakeApi {
        fn with_projects(projects: Vec<Project>) -> Self {
            let next_id = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let api = Self::default();
            {
                let mut state = api.inner.lock().unwrap();
                state.projects = projects;
                state.next_id = next_id;
            }
            api
        }

        fn set_failing(&self, fail: bool) {
            self.inner.lock().unwrap().fail = fail;
        }

        fn calls(&self) -> Vec<String> {
            self.inner.lock().unwrap().calls.clone()
        }

        fn last_update(&self) -> Option<UpdateProject> {
            self.inner.lock().unwrap().last_update.clone()
        }

        fn record(&self, call: String) -> Result<std::sync::MutexGuard<'_, FakeState>, ClientError> {
            let mut state = self.inner.lock().unwrap();
            state.calls.push(call);
            if state.fail {
                return Err(ClientError::Api {
                    status: 500,
                    body: "boom".into(),
                });
            }
            Ok(state)
        }
    }

    fn not_found() -> ClientError {
        ClientError::Api {
            status: 404,
            body: "{}".into(),
        }
    }

    #[async_trait]
    impl CatalogApi for FakeApi {
        async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, ClientError> {
            let state = self.record(format!("list:{}", category.unwrap_or("*")))?;
            Ok(state
                .projects
                .iter()
                .filter(|p| category.is_none_or(|c| p.category_id == c))
                .cloned()
                .collect())
        }

        async fn get_project(&self, id: ProjectId) -> Result<Project, ClientError> {
            let state = self.record(format!("get:{id}"))?;
            state
                .projects
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(not_found)
        }

        async fn create_project(&self, input: &CreateProject) -> Result<Project, ClientError> {
            let mut state = self.record("create".into())?;
            let project = Project::new(state.next_id, input.clone());
            state.next_id += 1;
            state.projects.push(project.clone());
            Ok(project)
        }

        async fn update_project(
            &self,
            id: ProjectId,
            input: &UpdateProject,
        ) -> Result<Project, ClientError> {
            let mut state = self.record(format!("update:{id}"))?;
            state.last_update = Some(input.clone());
            let slot = state
                .projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(not_found)?;
            *slot = slot.with_update(input.clone());
            Ok(slot.clone())
        }

        async fn delete_project(&self, id: ProjectId) -> Result<(), ClientError> {
            let mut state = self.record(format!("delete:{id}"))?;
            let before = state.projects.len();
            state.projects.retain(|p| p.id != id);
            if state.projects.len() == before {
                return Err(not_found());
            }
            Ok(())
        }

        async fn list_categories(&self) -> Result<Vec<String>, ClientError> {
            drop(self.record("categories".into())?);
            Ok(vec!["מזון".into(), "ספורט".into()])
        }
    }

    struct FakeDialogs {
        answer: bool,
        asked: Cell<u32>,
    }

    impl Dialogs for FakeDialogs {
        fn confirm(&self, _message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer
        }
    }

    fn dialogs(answer: bool) -> FakeDialogs {
        FakeDialogs {
            answer,
            asked: Cell::new(0),
        }
    }

    fn project(id: ProjectId, name: &str, category: &str) -> Project {
        Project {
            id,
            name: name.into(),
            description: format!("{name} description"),
            image_url: "https://x/y.png".into(),
            category_id: category.into(),
            rating: None,
        }
    }

    fn seeded() -> FakeApi {
        FakeApi::with_projects(vec![
            project(1, "ב", "ספורט"),
            project(2, "א", "מזון"),
        ])
    }

    async fn started(api: &FakeApi, answer: bool) -> ClientView<FakeApi, FakeDialogs> {
        let mut view = ClientView::new(api.clone(), dialogs(answer));
        view.start("").await;
        view
    }

    fn visible_names(view: &ClientView<FakeApi, FakeDialogs>) -> Vec<String> {
        view.visible().iter().map(|p| p.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_start_loads_categories_and_grid() {
        let api = seeded();
        let view = started(&api, true).await;

        assert_eq!(view.route(), Route::Grid);
        assert_eq!(view.categories().len(), 2);
        assert_eq!(view.cache().len(), 2);
        assert!(view.html().contains(r#"data-id="1""#));
        assert!(view.notice().is_none());
        assert_eq!(api.calls(), ["categories", "list:*"]);
    }

    #[tokio::test]
    async fn test_sort_and_search_apply_to_fetched_records() {
        let api = seeded();
        let mut view = started(&api, true).await;

        view.set_sort(SortOrder::NameAsc).await;
        assert_eq!(visible_names(&view), ["א", "ב"]);

        view.set_sort(SortOrder::Newest).await;
        assert_eq!(visible_names(&view), ["א", "ב"]);

        view.set_search("ב desc").await;
        assert_eq!(visible_names(&view), ["ב"]);
    }

    #[tokio::test]
    async fn test_category_filter_is_sent_to_the_server() {
        let api = seeded();
        let mut view = started(&api, true).await;

        view.set_category(Some("ספורט".into())).await;
        assert_eq!(api.calls().last().unwrap(), "list:ספורט");
        assert_eq!(visible_names(&view), ["ב"]);
    }

    #[tokio::test]
    async fn test_details_route_and_escape() {
        let api = seeded();
        let mut view = started(&api, true).await;

        view.open_card(2).await;
        assert_eq!(view.route(), Route::Details(2));
        assert_eq!(view.fragment(), "#/projects/2");
        assert_eq!(view.details().unwrap().name, "א");
        assert!(view.html().contains(r#"<select name="rating">"#));

        view.press_escape().await;
        assert_eq!(view.route(), Route::Grid);
        assert!(view.details().is_none());
        assert!(view.html().contains(r#"<div class="grid">"#));
    }

    #[tokio::test]
    async fn test_unknown_details_id_shows_notice() {
        let api = seeded();
        let mut view = started(&api, true).await;

        view.navigate("#/projects/99").await;
        assert_eq!(view.route(), Route::Details(99));
        assert!(view.details().is_none());
        assert_eq!(view.notice(), Some(messages::PROJECT_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_failed_load_shows_localized_notice() {
        let api = seeded();
        api.set_failing(true);
        let view = started(&api, true).await;

        assert_eq!(view.notice(), Some(messages::LOAD_FAILED));
        assert!(view.html().contains(messages::LOAD_FAILED));
        assert_eq!(view.route(), Route::Grid);
    }

    #[tokio::test]
    async fn test_failed_filtered_fetch_hides_previous_records() {
        let api = seeded();
        let mut view = started(&api, true).await;
        api.set_failing(true);

        view.set_category(Some("ספורט".into())).await;
        assert_eq!(view.notice(), Some(messages::LOAD_FAILED));
        assert!(view.visible().is_empty());
        assert!(!view.html().contains("data-id="));
        // Edit pre-fill still sees the last successful fetch.
        assert_eq!(view.cache().len(), 2);

        api.set_failing(false);
        view.set_category(Some("ספורט".into())).await;
        assert!(view.notice().is_none());
        assert_eq!(visible_names(&view), ["ב"]);
    }

    #[tokio::test]
    async fn test_declined_delete_makes_no_call() {
        let api = seeded();
        let mut view = started(&api, false).await;
        let before = api.calls().len();

        view.delete_project(1).await;
        assert_eq!(api.calls().len(), before);
        assert_eq!(view.dialogs.asked.get(), 1);
        assert_eq!(view.cache().len(), 2);
    }

    #[tokio::test]
    async fn test_confirmed_delete_refreshes_grid() {
        let api = seeded();
        let mut view = started(&api, true).await;

        view.delete_project(1).await;
        assert!(api.calls().contains(&"delete:1".to_string()));
        assert_eq!(api.calls().last().unwrap(), "list:*");
        assert!(view.cache().get(1).is_none());
        assert!(!view.html().contains(r#"data-id="1""#));
    }

    #[tokio::test]
    async fn test_delete_from_details_returns_to_grid() {
        let api = seeded();
        let mut view = started(&api, true).await;
        view.open_card(1).await;

        view.delete_project(1).await;
        assert_eq!(view.route(), Route::Grid);
        assert_eq!(view.fragment(), "");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_record() {
        let api = seeded();
        let mut view = started(&api, true).await;
        api.set_failing(true);

        view.delete_project(1).await;
        assert_eq!(view.notice(), Some(messages::DELETE_FAILED));
        assert!(view.cache().get(1).is_some());
    }

    #[tokio::test]
    async fn test_create_requires_fields_before_any_call() {
        let api = seeded();
        let mut view = started(&api, true).await;
        let before = api.calls().len();

        view.open_create();
        view.submit_create(CreateForm {
            name: "New".into(),
            ..Default::default()
        })
        .await;

        assert_eq!(api.calls().len(), before);
        assert_eq!(view.create_modal().state(), ModalState::Open);
        assert_eq!(view.create_modal().message(), Some(messages::MISSING_CREATE_FIELDS));
    }

    #[tokio::test]
    async fn test_create_success_closes_modal_and_refreshes() {
        let api = seeded();
        let mut view = started(&api, true).await;

        view.open_create();
        view.submit_create(CreateForm {
            name: "New".into(),
            description: "Fresh".into(),
            category: "מזון".into(),
            image: None,
        })
        .await;

        assert_eq!(view.create_modal().state(), ModalState::Closed);
        let created = view.cache().get(3).unwrap();
        assert_eq!(created.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(&api.calls()[api.calls().len() - 2..], ["create", "list:*"]);
    }

    #[tokio::test]
    async fn test_create_without_open_modal_is_ignored() {
        let api = seeded();
        let mut view = started(&api, true).await;
        let before = api.calls().len();

        view.submit_create(CreateForm {
            name: "New".into(),
            description: "Fresh".into(),
            category: "מזון".into(),
            image: None,
        })
        .await;
        assert_eq!(api.calls().len(), before);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_modal_open() {
        let api = seeded();
        let mut view = started(&api, true).await;
        api.set_failing(true);

        view.open_create();
        view.submit_create(CreateForm {
            name: "New".into(),
            description: "Fresh".into(),
            category: "מזון".into(),
            image: None,
        })
        .await;
        assert_eq!(view.create_modal().state(), ModalState::Open);
        assert_eq!(view.create_modal().message(), Some(messages::CREATE_FAILED));
    }

    #[tokio::test]
    async fn test_edit_prefills_from_cache_and_sends_non_blank_fields() {
        let api = seeded();
        let mut view = started(&api, true).await;

        let mut form = view.open_edit(1).cloned().unwrap();
        assert_eq!(form.name, "ב");
        assert_eq!(view.edit_modal().state(), ModalState::Open);

        form.name = "ג".into();
        form.description = "   ".into();
        view.submit_edit(form).await;

        let sent = api.last_update().unwrap();
        assert_eq!(sent.name.as_deref(), Some("ג"));
        assert!(sent.description.is_none());
        assert!(sent.image_url.is_none());
        assert_eq!(view.edit_modal().state(), ModalState::Closed);
        assert_eq!(view.cache().get(1).unwrap().name, "ג");
        assert_eq!(view.cache().get(1).unwrap().description, "ב description");
    }

    #[tokio::test]
    async fn test_declined_edit_makes_no_call() {
        let api = seeded();
        let mut view = started(&api, false).await;
        let before = api.calls().len();

        let form = view.open_edit(1).cloned().unwrap();
        view.submit_edit(form).await;
        assert_eq!(api.calls().len(), before);
        assert_eq!(view.edit_modal().state(), ModalState::Open);
    }

    #[tokio::test]
    async fn test_edit_unknown_id_shows_notice() {
        let api = seeded();
        let mut view = started(&api, true).await;

        assert!(view.open_edit(42).is_none());
        assert_eq!(view.notice(), Some(messages::PROJECT_NOT_FOUND));
        assert_eq!(view.edit_modal().state(), ModalState::Closed);
    }

    #[tokio::test]
    async fn test_rating_sends_only_rating() {
        let api = seeded();
        let mut view = started(&api, true).await;
        view.open_card(1).await;

        view.submit_rating(4).await;

        assert_eq!(api.last_update().unwrap(), rating_payload(4));
        let details = view.details().unwrap();
        assert_eq!(details.rating, Some(4));
        assert_eq!(details.name, "ב");
        assert!(view.html().contains(r#"<option value="4" selected>4</option>"#));
    }

    #[tokio::test]
    async fn test_declined_rating_makes_no_call() {
        let api = seeded();
        let mut view = started(&api, false).await;
        view.open_card(1).await;
        let before = api.calls().len();

        view.submit_rating(4).await;
        assert_eq!(api.calls().len(), before);
        assert!(view.details().unwrap().rating.is_none());
    }

    #[tokio::test]
    async fn test_rating_outside_details_is_ignored() {
        let api = seeded();
        let mut view = started(&api, true).await;

        view.submit_rating(4).await;
        assert_eq!(view.dialogs.asked.get(), 0);
        assert!(api.last_update().is_none());
    }
}
