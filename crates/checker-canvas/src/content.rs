//! Per-course content endpoints consumed by the checklist.

use checker_core::entities::{Assignment, FileInfo, Module, ModuleItem, Page, Tab};

use crate::{CanvasClient, CanvasError};

impl CanvasClient {
    /// `courses/{id}/front_page`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if the request fails; a course without a front
    /// page yields [`CanvasError::Remote`] with status 404.
    pub async fn front_page(&self, course_id: u64) -> Result<Page, CanvasError> {
        self.get_json(&format!("courses/{course_id}/front_page"), &[])
            .await
    }

    /// `courses/{id}/tabs`, all pages.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if any page fails.
    pub async fn tabs(&self, course_id: u64) -> Result<Vec<Tab>, CanvasError> {
        let per_page = self.per_page();
        self.get_paginated(
            &format!("courses/{course_id}/tabs"),
            &[("per_page", per_page.as_str())],
        )
        .await
    }

    /// `courses/{id}/modules`, all pages, in course order.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if any page fails.
    pub async fn modules(&self, course_id: u64) -> Result<Vec<Module>, CanvasError> {
        let per_page = self.per_page();
        self.get_paginated(
            &format!("courses/{course_id}/modules"),
            &[("per_page", per_page.as_str())],
        )
        .await
    }

    /// `courses/{id}/modules/{id}/items`, all pages, in module order.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if any page fails.
    pub async fn module_items(
        &self,
        course_id: u64,
        module_id: u64,
    ) -> Result<Vec<ModuleItem>, CanvasError> {
        let per_page = self.per_page();
        self.get_paginated(
            &format!("courses/{course_id}/modules/{module_id}/items"),
            &[("per_page", per_page.as_str())],
        )
        .await
    }

    /// `courses/{id}/files/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if the request fails.
    pub async fn file(&self, course_id: u64, file_id: u64) -> Result<FileInfo, CanvasError> {
        self.get_json(&format!("courses/{course_id}/files/{file_id}"), &[])
            .await
    }

    /// `courses/{id}/assignments`, all pages.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if any page fails.
    pub async fn assignments(&self, course_id: u64) -> Result<Vec<Assignment>, CanvasError> {
        let per_page = self.per_page();
        self.get_paginated(
            &format!("courses/{course_id}/assignments"),
            &[("per_page", per_page.as_str())],
        )
        .await
    }
}
