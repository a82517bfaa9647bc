//! Preview server for the helper library.
//!
//! # Overview
//! Serves a small message board whose every inline script and `onclick`
//! comes out of `prototype_helpers`, next to the endpoints that generated
//! JavaScript calls. Prototype posts observer and form parameters as
//! form-encoded bodies and tunnels non-GET verbs through POST with a
//! `_method` parameter, so the router speaks exactly that dialect.
//!
//! # Design
//! - Handlers return HTML fragments, the payload `Ajax.Updater` swaps into
//!   the page; only the board page itself is a full document.
//! - State is a shared `Vec<Post>` so fragments render in posting order.

pub mod views;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Post {
    pub id: Uuid,
    pub author: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub author: String,
    pub body: String,
}

/// Prototype tunnels non-GET verbs through POST, carrying the real verb in
/// a `_method` parameter.
#[derive(Deserialize)]
pub struct PostAction {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub type Db = Arc<RwLock<Vec<Post>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/", get(board))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", post(modify_post))
        .route("/search", post(search))
        .route("/status", post(status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn render(
    fragment: Result<String, prototype_helpers::UrlError>,
) -> Result<Html<String>, StatusCode> {
    match fragment {
        Ok(html) => Ok(Html(html)),
        Err(err) => {
            error!("render failed: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn board(State(db): State<Db>) -> Result<Html<String>, StatusCode> {
    let posts = db.read().await;
    render(views::board_page(posts.as_slice()))
}

async fn list_posts(State(db): State<Db>) -> Result<Html<String>, StatusCode> {
    let posts = db.read().await;
    render(views::posts_fragment(posts.as_slice()))
}

async fn create_post(
    State(db): State<Db>,
    Form(input): Form<CreatePost>,
) -> Result<Html<String>, StatusCode> {
    let post = Post {
        id: Uuid::new_v4(),
        author: input.author,
        body: input.body,
    };
    info!("created post {}", post.id);
    let mut posts = db.write().await;
    posts.push(post);
    render(views::posts_fragment(posts.as_slice()))
}

async fn modify_post(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Form(action): Form<PostAction>,
) -> Result<Html<String>, StatusCode> {
    match action.method.as_deref() {
        Some("delete") => {
            let mut posts = db.write().await;
            let before = posts.len();
            posts.retain(|post| post.id != id);
            if posts.len() == before {
                return Err(StatusCode::NOT_FOUND);
            }
            info!("deleted post {id}");
            render(views::posts_fragment(posts.as_slice()))
        }
        other => {
            warn!("unsupported action {other:?} on post {id}");
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

async fn search(State(db): State<Db>, Form(query): Form<SearchQuery>) -> Html<String> {
    let posts = db.read().await;
    Html(views::suggestions_fragment(posts.as_slice(), &query.q))
}

async fn status(State(db): State<Db>) -> Html<String> {
    let posts = db.read().await;
    Html(views::status_fragment(posts.len()))
}
