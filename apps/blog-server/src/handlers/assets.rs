//! Embedded static asset serving.

use actix_web::{
    HttpRequest, HttpResponse,
    http::{Method, header},
};
use include_dir::{Dir, File, include_dir};

use crate::middleware::error::{AppError, AppResult};

static PUBLIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/public");

/// Serve a file from `public/` at its relative path. Installed as the
/// default service, so anything else is a 404.
pub async fn serve_public(req: HttpRequest) -> AppResult<HttpResponse> {
    if *req.method() != Method::GET && *req.method() != Method::HEAD {
        return Err(not_found());
    }

    let path = req.path();
    let Some(file) = resolve_asset(&PUBLIC_ASSETS, path) else {
        tracing::debug!(path = %path, "Static asset not found");
        return Err(not_found());
    };

    let mime = mime_guess::from_path(file.path()).first_or_octet_stream();

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, mime.to_string()))
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(file.contents()))
}

fn not_found() -> AppError {
    AppError::NotFound("Resource not found.".to_string())
}

fn resolve_asset(bundle: &'static Dir<'static>, path: &str) -> Option<&'static File<'static>> {
    let candidate = path.trim_start_matches('/');

    // Avoid directory traversal and disallow directory listings.
    if candidate.is_empty() || candidate.ends_with('/') || candidate.contains("..") {
        return None;
    }

    bundle.get_file(candidate)
}
