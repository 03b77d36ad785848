use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, get_service},
    Router,
};
use serde::Deserialize;
use tower_http::services::{ServeDir, ServeFile};

use crate::catalog::Catalog;
use crate::content::Templates;
use crate::hot_reload;
use crate::render;
use crate::state::{AppState, RouterState};

#[derive(Deserialize, Debug, Default)]
pub struct ListParams {
    category: Option<String>,
}

pub fn router(state: RouterState) -> Router {
    let static_root = state.app_state.content_dir.join("static");
    let static_dir = get_service(ServeDir::new(&static_root));
    let favicon_ico = get_service(ServeFile::new(static_root.join("favicon.ico")));
    let favicon_png = get_service(ServeFile::new(static_root.join("favicon.png")));

    Router::new()
        .route("/", get(homepage))
        .route("/blog", get(blog_index))
        .route("/blog/{slug}", get(blog_post))
        .route("/projects", get(project_index))
        .route("/projects/{slug}", get(project_detail))
        .route("/skills", get(skills_index))
        .route("/skills/{slug}", get(skill_detail))
        .nest_service("/static", static_dir)
        .route_service("/favicon.ico", favicon_ico)
        .route_service("/favicon.png", favicon_png)
        .route("/ws", get(hot_reload::ws_handler))
        .with_state(state)
}

fn shell(
    templates: &Templates,
    catalog: &Catalog,
    is_development: bool,
    title: &str,
    body: &str,
) -> Html<String> {
    let footer = render::site_footer(&catalog.site);
    Html(render::render_with_layout(
        &templates.layout,
        &templates.banner,
        &footer,
        title,
        body,
        is_development,
    ))
}

async fn homepage(State(state): State<Arc<AppState>>) -> Html<String> {
    let templates = state.templates.read().await;
    let catalog = state.catalog.read().await;

    let body = render::home_page(&catalog, &templates.home);
    shell(
        &templates,
        &catalog,
        state.is_development,
        &catalog.site.title,
        &body,
    )
}

async fn blog_index(
    Query(params): Query<ListParams>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let templates = state.templates.read().await;
    let catalog = state.catalog.read().await;

    let body = render::blog_index(&catalog, params.category.as_deref());
    shell(&templates, &catalog, state.is_development, "Blog", &body)
}

async fn blog_post(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Html<String>) {
    let templates = state.templates.read().await;
    let catalog = state.catalog.read().await;

    match catalog.post_by_slug(&slug) {
        Some(post) => {
            let body = render::post_page(post);
            (
                StatusCode::OK,
                shell(&templates, &catalog, state.is_development, &post.title, &body),
            )
        }
        None => not_found(&templates, &catalog, state.is_development, &slug),
    }
}

async fn project_index(
    Query(params): Query<ListParams>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let templates = state.templates.read().await;
    let catalog = state.catalog.read().await;

    let body = render::project_index(&catalog, params.category.as_deref());
    shell(&templates, &catalog, state.is_development, "Projects", &body)
}

async fn project_detail(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Html<String>) {
    let templates = state.templates.read().await;
    let catalog = state.catalog.read().await;

    match catalog.project_by_slug(&slug) {
        Some(project) => {
            let body = render::project_page(project);
            (
                StatusCode::OK,
                shell(
                    &templates,
                    &catalog,
                    state.is_development,
                    &project.title,
                    &body,
                ),
            )
        }
        None => not_found(&templates, &catalog, state.is_development, &slug),
    }
}

async fn skills_index(State(state): State<Arc<AppState>>) -> Html<String> {
    let templates = state.templates.read().await;
    let catalog = state.catalog.read().await;

    let body = render::skills_page(&catalog);
    shell(&templates, &catalog, state.is_development, "Skills", &body)
}

async fn skill_detail(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Html<String>) {
    let templates = state.templates.read().await;
    let catalog = state.catalog.read().await;

    match catalog.skill_by_slug(&slug) {
        Some((group, skill)) => {
            let body = render::skill_page(group, skill);
            (
                StatusCode::OK,
                shell(&templates, &catalog, state.is_development, &skill.name, &body),
            )
        }
        None => not_found(&templates, &catalog, state.is_development, &slug),
    }
}

fn not_found(
    templates: &Templates,
    catalog: &Catalog,
    is_development: bool,
    slug: &str,
) -> (StatusCode, Html<String>) {
    let body = render::not_found_page(&templates.not_found, slug);
    (
        StatusCode::NOT_FOUND,
        shell(templates, catalog, is_development, "Not Found", &body),
    )
}
