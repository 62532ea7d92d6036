//! API documentation wiring shared by every service.
//!
//! `configure_docs` builds the OpenAPI document for one entity service and
//! `DocsConfig::mount` exposes it together with the Swagger UI. The UI lives
//! under `/docs`; the application root redirects there.

use axum::{response::Redirect, routing::get, Router};
use models::Entity;
use utoipa::openapi::path::{OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItemBuilder};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, KnownFormat, ObjectBuilder, SchemaFormat, SchemaType};
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{
    ComponentsBuilder, ContactBuilder, Content, ContentBuilder, InfoBuilder, LicenseBuilder, OpenApi as OpenApiDoc,
    OpenApiBuilder, PathItemType, PathsBuilder, Ref, RefOr, Required, Response, ResponseBuilder, Schema,
};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const SPEC_URL: &str = "/swagger/v1/swagger.json";
pub const UI_PATH: &str = "/docs";

const DOC_VERSION: &str = "v1";
const TERMS_OF_SERVICE: &str = "https://example.com/terms";
const CONTACT_NAME: &str = "Own Platform";
const LICENSE_NAME: &str = "Use under MIT";
const LICENSE_URL: &str = "https://opensource.org/licenses/MIT";

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Routes every service carries regardless of its entity.
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health),
    components(schemas(HealthResponse)),
    tags((name = "health"))
)]
pub struct PlatformDoc;

/// A fully built OpenAPI document ready to be served.
#[derive(Clone)]
pub struct DocsConfig {
    openapi: OpenApiDoc,
}

impl DocsConfig {
    pub fn openapi(&self) -> &OpenApiDoc { &self.openapi }

    /// Serve the document at [`SPEC_URL`], the UI at [`UI_PATH`] and redirect `/` to the UI.
    pub fn mount(self, router: Router) -> Router {
        router
            .route("/", get(|| async { Redirect::temporary("/docs/") }))
            .merge(SwaggerUi::new(UI_PATH).url(SPEC_URL, self.openapi))
    }
}

/// Build the documentation for the service exposing `E`.
pub fn configure_docs<E>(title: &str, description: &str) -> DocsConfig
where
    E: Entity + for<'s> ToSchema<'s>,
{
    let mut openapi = PlatformDoc::openapi();
    openapi.merge(entity_doc::<E>());
    openapi.info = InfoBuilder::new()
        .title(title)
        .version(DOC_VERSION)
        .description(Some(description))
        .terms_of_service(Some(TERMS_OF_SERVICE))
        .contact(Some(ContactBuilder::new().name(Some(CONTACT_NAME)).build()))
        .license(Some(LicenseBuilder::new().name(LICENSE_NAME).url(Some(LICENSE_URL)).build()))
        .build();
    DocsConfig { openapi }
}

fn entity_doc<E>() -> OpenApiDoc
where
    E: Entity + for<'s> ToSchema<'s>,
{
    let (schema_name, schema) = E::schema();
    let schema_name = schema_name.to_string();
    let single = || ContentBuilder::new().schema(RefOr::Ref(Ref::from_schema_name(schema_name.clone()))).build();
    let many = ContentBuilder::new()
        .schema(RefOr::T(Schema::Array(
            ArrayBuilder::new().items(RefOr::Ref(Ref::from_schema_name(schema_name.clone()))).build(),
        )))
        .build();
    let body = || RequestBodyBuilder::new().content("application/json", single()).required(Some(Required::True)).build();

    let create = operation::<E>(format!("Create{}", E::SINGULAR))
        .request_body(Some(body()))
        .response("201", response("Created", Some(single())))
        .build();
    let list = operation::<E>(format!("GetAll{}", E::PLURAL))
        .response("200", response("OK", Some(many)))
        .build();
    let get_one = operation::<E>(format!("Get{}ById", E::SINGULAR))
        .parameter(id_parameter())
        .response("200", response("OK", Some(single())))
        .response("404", response("Not Found", None))
        .build();
    let update = operation::<E>(format!("Update{}", E::SINGULAR))
        .parameter(id_parameter())
        .request_body(Some(body()))
        .response("204", response("No Content", None))
        .response("404", response("Not Found", None))
        .build();
    let delete = operation::<E>(format!("Delete{}", E::SINGULAR))
        .parameter(id_parameter())
        .response("200", response("Deleted", Some(single())))
        .response("404", response("Not Found", None))
        .build();

    let paths = PathsBuilder::new()
        .path(
            format!("/{}", E::RESOURCE),
            PathItemBuilder::new()
                .operation(PathItemType::Post, create)
                .operation(PathItemType::Get, list)
                .build(),
        )
        .path(
            format!("/{}/{{id}}", E::RESOURCE),
            PathItemBuilder::new()
                .operation(PathItemType::Get, get_one)
                .operation(PathItemType::Put, update)
                .operation(PathItemType::Delete, delete)
                .build(),
        )
        .build();

    OpenApiBuilder::new()
        .paths(paths)
        .components(Some(ComponentsBuilder::new().schema(schema_name.clone(), schema).build()))
        .tags(Some(vec![TagBuilder::new().name(E::RESOURCE).build()]))
        .build()
}

fn operation<E: Entity>(operation_id: String) -> OperationBuilder {
    OperationBuilder::new().tag(E::RESOURCE).operation_id(Some(operation_id))
}

fn response(description: &str, content: Option<Content>) -> RefOr<Response> {
    let mut builder = ResponseBuilder::new().description(description);
    if let Some(content) = content {
        builder = builder.content("application/json", content);
    }
    RefOr::T(builder.build())
}

fn id_parameter() -> Parameter {
    let uuid = ObjectBuilder::new()
        .schema_type(SchemaType::String)
        .format(Some(SchemaFormat::KnownFormat(KnownFormat::Uuid)))
        .build();
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(RefOr::T(Schema::Object(uuid))))
        .build()
}
