use std::collections::BTreeSet;

use actix_web::http::Method;
use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{
    ComponentsBuilder, InfoBuilder, OpenApi, OpenApiBuilder, Paths, RefOr, Required, Response,
};

use super::action::Action;
use super::view::{Operation, ViewDoc};

/// Collected view documentation, rendered as OpenAPI 3
#[derive(Debug, Clone)]
pub struct ApiDocs {
    title: String,
    version: String,
    views: Vec<ViewDoc>,
}

impl ApiDocs {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            views: Vec::new(),
        }
    }

    pub fn view(mut self, view: ViewDoc) -> Self {
        self.views.push(view);
        self
    }

    pub fn views(&self) -> &[ViewDoc] {
        &self.views
    }

    pub fn to_openapi(&self) -> OpenApi {
        let mut paths = Paths::new();
        let mut tags = BTreeSet::new();

        for view in &self.views {
            for op in view.operations() {
                let Some(method) = http_method(&op.method) else {
                    tracing::debug!(view = view.name(), method = %op.method, "Method left out of API docs");
                    continue;
                };
                tags.extend(op.tags.iter().cloned());
                paths.add_path_operation(op.path.as_str(), vec![method], operation(view, op));
            }
        }

        let bearer = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .build();

        OpenApiBuilder::new()
            .info(InfoBuilder::new().title(&self.title).version(&self.version))
            .paths(paths)
            .tags(Some(tags.into_iter().map(|name| TagBuilder::new().name(name).build())))
            .components(Some(
                ComponentsBuilder::new()
                    .security_scheme("Bearer", SecurityScheme::Http(bearer))
                    .build(),
            ))
            .build()
    }
}

fn operation(view: &ViewDoc, op: &Operation) -> utoipa::openapi::path::Operation {
    let (status, outcome) = match op.action {
        Action::Create => ("201", "Created"),
        Action::Destroy => ("204", "Deleted"),
        _ => ("200", "Success"),
    };

    let mut builder = OperationBuilder::new()
        .operation_id(Some(format!("{}_{}", view.name(), op.action)))
        .tags(Some(op.tags.clone()))
        .summary(op.summary.clone())
        .description(op.description.clone())
        .response(status, Response::new(outcome));

    for name in path_parameters(&op.path) {
        let integer = ObjectBuilder::new().schema_type(Type::Integer).build();
        builder = builder.parameter(
            ParameterBuilder::new()
                .name(name)
                .parameter_in(ParameterIn::Path)
                .required(Required::True)
                .schema(Some(RefOr::T(Schema::Object(integer)))),
        );
    }

    builder.build()
}

fn http_method(method: &Method) -> Option<HttpMethod> {
    [
        (Method::GET, HttpMethod::Get),
        (Method::POST, HttpMethod::Post),
        (Method::PUT, HttpMethod::Put),
        (Method::PATCH, HttpMethod::Patch),
        (Method::DELETE, HttpMethod::Delete),
    ]
    .into_iter()
    .find_map(|(known, documented)| (&known == method).then_some(documented))
}

/// Names of the `{param}` segments of `path`
fn path_parameters(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
}
