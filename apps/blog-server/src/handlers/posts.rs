//! Post API handlers.

use std::future::{Future, ready};
use std::pin::Pin;

use actix_web::{
    Either, FromRequest, HttpRequest, HttpResponse,
    dev::Payload,
    http::header::{CONTENT_LENGTH, CONTENT_TYPE, TRANSFER_ENCODING},
    web,
};
use serde::de::DeserializeOwned;

use blog_core::DomainError;
use blog_core::domain::PostId;
use blog_shared::dto::{CreatePostRequest, UpdatePostRequest};
use blog_shared::{MessageResponse, PostResponse};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// A request body sent either as JSON or as an urlencoded form.
type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Request body extractor that accepts JSON or a form, and treats a request
/// without a body as `T::default()`.
pub struct Body<T>(pub T);

impl<T> Body<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Body<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !has_body(req) {
            return Box::pin(ready(Ok(Body(T::default()))));
        }

        let fut = JsonOrForm::<T>::from_request(req, payload);
        Box::pin(async move {
            match fut.await.map_err(actix_web::Error::from)? {
                Either::Left(json) => Ok(Body(json.into_inner())),
                Either::Right(form) => Ok(Body(form.into_inner())),
            }
        })
    }
}

/// A zero `Content-Length`, or no length, no chunked transfer and no
/// `Content-Type`, means the client sent nothing.
fn has_body(req: &HttpRequest) -> bool {
    let headers = req.headers();
    if headers.contains_key(TRANSFER_ENCODING) {
        return true;
    }

    match headers.get(CONTENT_LENGTH) {
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .is_none_or(|len| len > 0),
        None => headers.contains_key(CONTENT_TYPE),
    }
}

/// Path ids travel as text; anything that is not a valid id is simply an
/// unknown post.
fn parse_id(raw: &str) -> Result<PostId, DomainError> {
    PostId::parse(raw).ok_or_else(|| DomainError::NotFound {
        entity_type: "Post",
        id: raw.to_string(),
    })
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: Body<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let draft = body.into_inner().into_draft()?;
    let post = state.posts.create(draft).await?;

    tracing::info!(post_id = %post.id, request_id = request_id.as_str(), "Post added");

    Ok(HttpResponse::Ok().json(PostResponse::created(post)))
}

/// PATCH /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: Body<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let patch = body.into_inner().into_patch();
    let post = state.posts.update(id, patch).await?;

    tracing::info!(post_id = %id, request_id = request_id.as_str(), "Post updated");

    Ok(HttpResponse::Ok().json(PostResponse::updated(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, request_id = request_id.as_str(), "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::deleted()))
}
