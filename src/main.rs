pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::about;
pub use modules::auth;
pub use modules::contact;
pub use modules::editor;
pub use modules::email;
pub use modules::media;
pub use modules::notification;
pub use modules::project;

use crate::about::adapter::outgoing::introduction_postgres::IntroductionPostgres;
use crate::about::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::about::adapter::outgoing::study_postgres::StudyPostgres;
use crate::about::adapter::outgoing::technical_skill_postgres::TechnicalSkillPostgres;
use crate::about::adapter::outgoing::work_experience_postgres::WorkExperiencePostgres;
use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::services::get_introduction::GetIntroductionService;
use crate::about::application::services::get_studies::GetStudiesService;
use crate::about::application::services::get_technical_skills::GetTechnicalSkillsService;
use crate::about::application::services::get_work_experience::GetWorkExperienceService;
use crate::about::application::services::upload_avatar::UploadAvatarService;
use crate::about::application::services::upsert_introduction::UpsertIntroductionService;
use crate::about::application::services::upsert_study::UpsertStudyService;
use crate::about::application::services::upsert_technical_skill::UpsertTechnicalSkillService;
use crate::about::application::services::upsert_work_experience::UpsertWorkExperienceService;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::fetch_session::FetchSessionService;
use crate::auth::application::use_cases::login_user::LoginUserService;
use crate::auth::application::use_cases::refresh_token::RefreshTokenService;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::submit_contact::SubmitContactService;
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;
use crate::media::adapter::outgoing::HttpObjectStorage;
use crate::media::application::ports::outgoing::ObjectStorage;
use crate::media::domain::upload_policy::ImagePolicy;
use crate::project::adapter::outgoing::project_query_postgres::ProjectQueryPostgres;
use crate::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::use_cases::attach_image::AttachProjectImageService;
use crate::project::application::use_cases::clear_image::ClearProjectImageService;
use crate::project::application::use_cases::create_project::CreateProjectService;
use crate::project::application::use_cases::delete_project::DeleteProjectService;
use crate::project::application::use_cases::get_project_by_slug::GetProjectBySlugService;
use crate::project::application::use_cases::get_projects::GetProjectsService;
use crate::project::application::use_cases::patch_project::PatchProjectService;
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub about: AboutUseCases,
    pub project: ProjectUseCases,
    pub contact: ContactUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Required configuration. Everything downstream depends on these, so a
    // missing value aborts startup instead of limping along half-configured.
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let storage_url = env::var("STORAGE_URL").expect("STORAGE_URL is not set in .env file");
    let storage_key = env::var("STORAGE_API_KEY").expect("STORAGE_API_KEY is not set in .env file");
    let storage_bucket = env::var("STORAGE_BUCKET").unwrap_or_else(|_| "portfolio".to_string());

    // Contact-form SMTP is optional: without it the server still runs and
    // /api/contact answers with an explicit configuration error.
    let contact_sender: Option<Arc<dyn EmailSender>> = match (
        env::var("SMTP_SERVER"),
        env::var("SMTP_USERNAME"),
        env::var("SMTP_PASSWORD"),
        env::var("EMAIL_FROM"),
    ) {
        (Ok(server), Ok(username), Ok(password), Ok(from)) => {
            let sender = if env_name == "test" {
                // Local Mailpit
                let smtp_host =
                    env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
                let smtp_port: u16 = env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "1025".to_string())
                    .parse()
                    .expect("Invalid SMTP_PORT");

                SmtpEmailSender::new_local(&smtp_host, smtp_port, &from)
            } else {
                SmtpEmailSender::new(&server, &username, &password, &from)
                    .expect("Invalid SMTP configuration")
            };
            Some(Arc::new(sender))
        }
        _ => {
            tracing::warn!("SMTP not configured; contact form delivery is disabled");
            None
        }
    };
    let contact_email = env::var("CONTACT_EMAIL").unwrap_or_default();
    let contact_name = env::var("CONTACT_NAME").unwrap_or_else(|_| "Portfolio Owner".to_string());

    let server_url = format!("{host}:{port}");
    info!("Server running on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Object storage
    let storage: Arc<dyn ObjectStorage> = Arc::new(HttpObjectStorage::new(
        &storage_url,
        &storage_key,
        &storage_bucket,
    ));

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = if env_name == "production" {
        Argon2Hasher::new()
    } else {
        Argon2Hasher::fast()
    };

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let auth = AuthUseCases {
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::new(password_hasher),
            Arc::new(jwt_service.clone()),
        )),
        fetch_session: Arc::new(FetchSessionService::new(
            user_query.clone(),
            Arc::new(jwt_service.clone()),
        )),
        refresh: Arc::new(RefreshTokenService::new(Arc::new(jwt_service.clone()))),
    };

    // About sections
    let introduction_adapter = IntroductionPostgres::new(Arc::clone(&db_arc));
    let work_experience_adapter = WorkExperiencePostgres::new(Arc::clone(&db_arc));
    let study_adapter = StudyPostgres::new(Arc::clone(&db_arc));
    let skill_adapter = TechnicalSkillPostgres::new(Arc::clone(&db_arc));

    let about = AboutUseCases {
        get_introduction: Arc::new(GetIntroductionService::new(introduction_adapter.clone())),
        upsert_introduction: Arc::new(UpsertIntroductionService::new(
            introduction_adapter.clone(),
        )),
        get_work_experience: Arc::new(GetWorkExperienceService::new(
            work_experience_adapter.clone(),
        )),
        upsert_work_experience: Arc::new(UpsertWorkExperienceService::new(
            work_experience_adapter,
        )),
        get_studies: Arc::new(GetStudiesService::new(study_adapter.clone())),
        upsert_study: Arc::new(UpsertStudyService::new(study_adapter)),
        get_skills: Arc::new(GetTechnicalSkillsService::new(skill_adapter.clone())),
        upsert_skill: Arc::new(UpsertTechnicalSkillService::new(skill_adapter)),
        upload_avatar: Arc::new(UploadAvatarService::new(
            ImagePolicy::new(),
            Arc::clone(&storage),
            ProfileRepositoryPostgres::new(Arc::clone(&db_arc)),
            introduction_adapter,
        )),
    };

    // Projects
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));

    let project = ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_by_slug: Arc::new(GetProjectBySlugService::new(project_query.clone())),
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        patch: Arc::new(PatchProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo.clone())),
        attach_image: Arc::new(AttachProjectImageService::new(
            ImagePolicy::new(),
            Arc::clone(&storage),
            project_query.clone(),
            project_repo.clone(),
        )),
        clear_image: Arc::new(ClearProjectImageService::new(
            Arc::clone(&storage),
            project_query,
            project_repo,
        )),
    };

    // Contact form
    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(
            contact_sender,
            contact_email,
            contact_name,
        )),
    };

    let state = AppState {
        auth,
        about,
        project,
        contact,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::db_status);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    // About sections
    cfg.service(crate::about::adapter::incoming::web::routes::get_introduction_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_work_experience_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_studies_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_technical_skills_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::upsert_introduction_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::upsert_work_experience_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::upsert_study_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::upsert_technical_skill_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::upload_avatar_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_by_slug_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::patch_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::attach_project_image_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::clear_project_image_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
