use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: u64,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraftDoc {
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: u64,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentPatchDoc {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
    pub post_id: Option<u64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::comments::list,
        crate::routes::comments::get,
        crate::routes::comments::create,
        crate::routes::comments::update,
        crate::routes::comments::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CommentDoc,
            CommentDraftDoc,
            CommentPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "comments")
    )
)]
pub struct ApiDoc;
