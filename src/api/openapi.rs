use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content management API for the portfolio site"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_session::fetch_session_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,

        // About sections
        crate::about::adapter::incoming::web::routes::get_sections::get_introduction_handler,
        crate::about::adapter::incoming::web::routes::get_sections::get_work_experience_handler,
        crate::about::adapter::incoming::web::routes::get_sections::get_studies_handler,
        crate::about::adapter::incoming::web::routes::get_sections::get_technical_skills_handler,
        crate::about::adapter::incoming::web::routes::upsert_introduction::upsert_introduction_handler,
        crate::about::adapter::incoming::web::routes::upsert_work_experience::upsert_work_experience_handler,
        crate::about::adapter::incoming::web::routes::upsert_study::upsert_study_handler,
        crate::about::adapter::incoming::web::routes::upsert_technical_skill::upsert_technical_skill_handler,
        crate::about::adapter::incoming::web::routes::upload_avatar::upload_avatar_handler,

        // Projects
        crate::project::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_project_by_slug::get_project_by_slug_handler,
        crate::project::adapter::incoming::web::routes::create_project::create_project_handler,
        crate::project::adapter::incoming::web::routes::patch_project::patch_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project::delete_project_handler,
        crate::project::adapter::incoming::web::routes::project_images::attach_project_image_handler,
        crate::project::adapter::incoming::web::routes::project_images::clear_project_image_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
    ),
    components(schemas(ErrorResponse, ErrorDetail)),
    tags(
        (name = "auth", description = "Owner authentication"),
        (name = "about", description = "About-page sections"),
        (name = "projects", description = "Project showcase"),
        (name = "contact", description = "Contact form"),
    )
)]
pub struct ApiDoc;
