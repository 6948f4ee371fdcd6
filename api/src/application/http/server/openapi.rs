use crate::application::http::doctor::router::DoctorApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediseek API"
    )
)]
struct BaseApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    // The derive macro rejects `nest(path = "")`, so the empty-path nest of
    // `DoctorApiDoc` is applied at runtime instead.
    pub fn openapi() -> utoipa::openapi::OpenApi {
        BaseApiDoc::openapi().nest("", DoctorApiDoc::openapi())
    }
}
