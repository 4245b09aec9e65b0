use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::project::adapter::outgoing::sea_orm_entity::projects::Entity as Projects;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
struct ConnectionInfo {
    database: &'static str,
    ssl: &'static str,
}

#[derive(Serialize)]
struct DbStatusOk {
    status: &'static str,
    message: &'static str,
    timestamp: String,
    connection_info: ConnectionInfo,
    projects_count: u64,
}

#[derive(Serialize)]
struct DbStatusErrorDetail {
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct DbStatusError {
    status: &'static str,
    message: &'static str,
    error: DbStatusErrorDetail,
    suggestions: [&'static str; 3],
}

/// Connection diagnostics. Purely observational: a cheap count against the
/// projects table, with remediation hints when it fails.
#[get("/api/db-status")]
pub async fn db_status(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    match Projects::find().count(&***db).await {
        Ok(count) => HttpResponse::Ok().json(DbStatusOk {
            status: "connected",
            message: "Database connection successful",
            timestamp: Utc::now().to_rfc3339(),
            connection_info: ConnectionInfo {
                database: "postgres",
                ssl: "enabled",
            },
            projects_count: count,
        }),

        Err(e) => {
            error!("Database connection test failed: {}", e);

            HttpResponse::InternalServerError().json(DbStatusError {
                status: "error",
                message: "Database connection failed",
                error: DbStatusErrorDetail {
                    code: "CONNECTION_FAILED",
                    message: e.to_string(),
                },
                suggestions: [
                    "Check that DATABASE_URL is set and reachable",
                    "Make sure the migrations have been applied (the projects table must exist)",
                    "Check the database server logs for more detail",
                ],
            })
        }
    }
}
