//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, lists};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Curata API",
        version = "0.3.0",
        description = "Curated booklist import REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Lists
        lists::list_lists,
        lists::get_list,
        lists::create_list,
        lists::import_rows,
    ),
    components(
        schemas(
            health::HealthResponse,
            lists::ImportRequest,
            crate::models::custom_list::CustomList,
            crate::models::custom_list::CustomListEntry,
            crate::models::custom_list::CreateCustomList,
            crate::models::import_report::ImportReport,
            crate::models::import_report::RowOutcome,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "lists", description = "Curated lists and imports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
