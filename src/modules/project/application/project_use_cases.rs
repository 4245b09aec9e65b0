use std::sync::Arc;

use crate::project::application::use_cases::attach_image::AttachProjectImageUseCase;
use crate::project::application::use_cases::clear_image::ClearProjectImageUseCase;
use crate::project::application::use_cases::create_project::CreateProjectUseCase;
use crate::project::application::use_cases::delete_project::DeleteProjectUseCase;
use crate::project::application::use_cases::get_project_by_slug::GetProjectBySlugUseCase;
use crate::project::application::use_cases::get_projects::GetProjectsUseCase;
use crate::project::application::use_cases::patch_project::PatchProjectUseCase;

/// Project use cases as wired into `AppState`.
#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase>,
    pub get_by_slug: Arc<dyn GetProjectBySlugUseCase>,
    pub create: Arc<dyn CreateProjectUseCase>,
    pub patch: Arc<dyn PatchProjectUseCase>,
    pub delete: Arc<dyn DeleteProjectUseCase>,
    pub attach_image: Arc<dyn AttachProjectImageUseCase>,
    pub clear_image: Arc<dyn ClearProjectImageUseCase>,
}
