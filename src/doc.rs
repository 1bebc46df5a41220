//! OpenAPI document for the REST API, served by Swagger UI at `/docs`.

use crate::error::ErrorBody;
use crate::handlers::{BookList, Health, Liveness, Readiness, ReplaceUser, ServiceInfo};
use crate::model::{Book, NewUser, User, UserChanges};
use axum::Router;
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::books::list_books,
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::create_user,
        crate::handlers::users::update_user,
        crate::handlers::users::replace_user,
        crate::handlers::users::delete_user,
        crate::handlers::probes::live,
        crate::handlers::probes::ready,
        crate::handlers::probes::version,
    ),
    components(schemas(
        User,
        NewUser,
        UserChanges,
        ReplaceUser,
        Book,
        BookList,
        ErrorBody,
        Health,
        Liveness,
        Readiness,
        ServiceInfo
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "books", description = "Fixed demo listing"),
        (name = "health", description = "Probes and build metadata")
    )
)]
pub struct ApiDoc;

/// The document, titled and versioned from the crate metadata.
pub fn openapi() -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.info.title = env!("CARGO_PKG_NAME").to_string();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
}

pub fn docs_routes() -> Router {
    Router::new().merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_api_route() {
        let doc = openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            ["/api/books", "/api/users", "/api/users/{id}", "/health", "/ready", "/version"]
        );

        let item = &doc.paths.paths["/api/users/{id}"];
        assert!(item.get.is_some());
        assert!(item.patch.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
        assert!(item.post.is_none());
    }

    #[test]
    fn title_and_version_come_from_crate() {
        let doc = openapi();
        assert_eq!(doc.info.title, "user-api");
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }
}
