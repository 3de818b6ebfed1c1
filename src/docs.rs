use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::images::handler::list_images,
        crate::modules::proxy::handler::proxy_image,
    ),
    components(
        schemas(
            crate::common::response::ErrorBody,
            crate::modules::images::dto::DriveImage,
            crate::modules::images::dto::PaginationInfo,
            crate::modules::images::dto::ImagesResponse,
        )
    ),
    tags(
        (name = "Images", description = "Drive folder listing and image proxy")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/images"));
        assert!(doc.paths.paths.contains_key("/api/proxy-image"));
    }
}
