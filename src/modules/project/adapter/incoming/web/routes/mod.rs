pub mod create_project;
pub mod delete_project;
pub mod get_project_by_slug;
pub mod get_projects;
pub mod patch_project;
pub mod project_images;

pub use create_project::create_project_handler;
pub use delete_project::delete_project_handler;
pub use get_project_by_slug::get_project_by_slug_handler;
pub use get_projects::get_projects_handler;
pub use patch_project::patch_project_handler;
pub use project_images::{attach_project_image_handler, clear_project_image_handler};
