//! Deployment guide and file upload endpoints.

use crate::connection::ConnectionState;
use crate::http::{self, ApiResult};
use crate::models::meta::{DeploymentGuide, UploadResponse};

pub async fn deployment_guide(conn: &ConnectionState) -> ApiResult<DeploymentGuide> {
    http::get_json(conn, "/meta/deployment-guide").await
}

/// Multipart upload of a picked file. The stored file is referenced by
/// `file_id` from attachment lists; storage itself stays server-side.
pub async fn upload_file(
    conn: &ConnectionState,
    file: &web_sys::File,
    module_type: &str,
    module_id: Option<&str>,
) -> ApiResult<UploadResponse> {
    let form = web_sys::FormData::new()
        .map_err(|_| http::ApiError::Transport("could not build form data".to_string()))?;
    let _ = form.append_with_blob_and_filename("file", file, &file.name());
    let _ = form.append_with_str("module_type", module_type);
    if let Some(module_id) = module_id {
        let _ = form.append_with_str("module_id", module_id);
    }
    http::post_form(conn, "/upload", &form).await
}
