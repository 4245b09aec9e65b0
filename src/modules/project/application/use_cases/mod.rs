pub mod attach_image;
pub mod clear_image;
pub mod create_project;
pub mod delete_project;
pub mod get_project_by_slug;
pub mod get_projects;
pub mod patch_project;
