//! Server-rendered pages.

use actix_web::{HttpResponse, http::header::ContentType, web};
use askama::Template;

use blog_core::domain::Post;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// A post as the page template displays it.
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// RFC 3339, for the browser script.
    pub created_at: String,
    pub date: String,
    pub time: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.0,
            created_at: post.created_at.to_rfc3339(),
            date: post.created_at.format("%Y-%m-%d").to_string(),
            time: post.created_at.format("%H:%M").to_string(),
            title: post.title,
            content: post.content,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<PostView>,
}

/// GET / - the post list, newest first.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let template = IndexTemplate {
        posts: posts.into_iter().map(PostView::from).collect(),
    };

    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template rendering failed: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{
        http::{Method, StatusCode},
        test as actix_test,
    };

    use blog_core::domain::NewPost;
    use blog_core::ports::PostRepository;
    use blog_infra::InMemoryPostStore;

    use super::*;
    use crate::handlers::test_support::app;

    #[actix_web::test]
    async fn test_index_lists_newest_first() {
        let app = actix_test::init_service(app(AppState::new(true))).await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );

        let body = actix_test::read_body(res).await;
        let html = std::str::from_utf8(&body).unwrap();
        let second = html.find("Second Post").unwrap();
        let first = html.find("First Post").unwrap();
        assert!(second < first);
        assert!(html.contains(r#"id="post-1""#));
        assert!(html.contains(r#"src="/script.js""#));
    }

    #[actix_web::test]
    async fn test_index_escapes_user_content() {
        let store = InMemoryPostStore::new();
        store
            .create(NewPost::new("<script>alert(1)</script>", "a & b").unwrap())
            .await
            .unwrap();
        let app = actix_test::init_service(app(AppState::with_repository(Arc::new(store)))).await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        let body = actix_test::read_body(res).await;
        let html = std::str::from_utf8(&body).unwrap();

        // askama writes numeric character references.
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&#60;script&#62;alert(1)&#60;/script&#62;"));
        assert!(html.contains("a &#38; b"));
    }

    #[actix_web::test]
    async fn test_index_answers_head() {
        let app = actix_test::init_service(app(AppState::new(true))).await;

        let req = actix_test::TestRequest::default()
            .method(Method::HEAD)
            .uri("/")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[actix_web::test]
    async fn test_index_without_posts() {
        let app = actix_test::init_service(app(AppState::new(false))).await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        let body = actix_test::read_body(res).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("No posts yet."));
    }
}
