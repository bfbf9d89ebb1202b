//! Read-only HTTP API over the catalog
//!
//! Every request builds a fresh `FilterState` from its query string and calls
//! back into the filter and renderer, so the server keeps no UI state.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{Article, Project};
use crate::filter::{self, FilterState};
use crate::render::{self, html::html_escape, ContentBlock, HtmlRenderer};
use crate::{Folio, Site};

/// Server state
pub struct ServerState {
    site: Site,
    config: SiteConfig,
    html: HtmlRenderer,
}

impl ServerState {
    pub fn new(site: Site, config: SiteConfig) -> Self {
        let html = HtmlRenderer::from_config(&config.highlight);
        Self { site, config, html }
    }
}

/// `?q=&tag=` on the article list
#[derive(Debug, Default, Deserialize)]
pub struct ArticleParams {
    #[serde(default)]
    pub q: String,
    pub tag: Option<String>,
}

impl ArticleParams {
    fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.q.clone(),
            selected_tag: self.tag.clone().filter(|t| !t.is_empty()),
        }
    }
}

/// `?category=` on the project list
#[derive(Debug, Default, Deserialize)]
pub struct ProjectParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub blocks: Vec<ContentBlock>,
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/articles/tags", get(article_tags))
        .route("/api/articles/:slug", get(article_detail))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/featured", get(featured_projects))
        .route("/api/projects/categories", get(project_categories))
        .route("/articles/:slug", get(article_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let site = folio.load_site()?;
    tracing::info!(
        "Serving {} articles and {} projects",
        site.catalog.articles.len(),
        site.catalog.projects.len()
    );

    let state = Arc::new(ServerState::new(site, folio.config.clone()));
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_articles(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ArticleParams>,
) -> Json<Vec<Article>> {
    let filter_state = params.filter_state();
    let articles = filter::filter(&state.site.catalog.articles, &filter_state)
        .into_iter()
        .map(Article::summary)
        .collect();
    Json(articles)
}

async fn article_tags(State(state): State<Arc<ServerState>>) -> Json<Vec<String>> {
    Json(filter::all_tags(&state.site.catalog.articles))
}

async fn article_detail(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match state.site.article(&slug) {
        Some(article) => Json(ArticleDetail {
            article: article.summary(),
            blocks: render::render(&article.body),
        })
        .into_response(),
        None => not_found(&slug),
    }
}

async fn article_page(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    let Some(article) = state.site.article(&slug) else {
        return not_found(&slug);
    };

    let body = state.html.render(&render::render(&article.body));
    let page = format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head><meta charset="utf-8"><title>{title} | {site}</title></head>
<body>
<article>
<h1>{title}</h1>
<p class="meta">{date} · {read_time}</p>
<p class="description">{description}</p>
{body}</article>
</body>
</html>
"#,
        lang = html_escape(&state.config.language),
        site = html_escape(&state.config.title),
        title = html_escape(&article.title),
        date = html_escape(&article.date),
        read_time = html_escape(&article.read_time),
        description = html_escape(&article.description),
        body = body,
    );

    Html(page).into_response()
}

async fn list_projects(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ProjectParams>,
) -> Json<Vec<Project>> {
    let all_label = &state.config.projects.all_label;
    let filter_state = match params.category.as_deref() {
        Some(category) if !category.is_empty() => {
            FilterState::new().with_category(category, all_label)
        }
        _ => FilterState::new(),
    };

    Json(
        filter::filter(&state.site.catalog.projects, &filter_state)
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn featured_projects(State(state): State<Arc<ServerState>>) -> Json<Vec<Project>> {
    Json(
        filter::featured(&state.site.catalog.projects)
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn project_categories(State(state): State<Arc<ServerState>>) -> Json<Vec<String>> {
    Json(filter::project_categories(
        &state.config.projects,
        &state.site.catalog.projects,
    ))
}

fn not_found(slug: &str) -> Response {
    tracing::debug!("Article not found: {}", slug);
    (StatusCode::NOT_FOUND, format!("Article not found: {}", slug)).into_response()
}
