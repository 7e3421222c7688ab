use std::sync::Arc;
use std::{fs, io};

use ntex::web;
use ntex::web::HttpRequest;
use spdlog::info;

use crate::config::{Config, Pagination};
use crate::loader::{load_users, LoadResult};
use crate::paginator::Paginator;
use crate::query_string::QueryString;
use crate::view::users_renderer::{UsersRenderer, DEFAULT_USERS_TEMPLATE};

const USERS_TEMPLATE_NAME: &str = "users.tpl";

struct AppState {
    config: Config,
    renderer: UsersRenderer<'static>,
}

fn load_template(config: &Config) -> io::Result<String> {
    let Some(ref template_dir) = config.paths.template_dir else {
        return Ok(DEFAULT_USERS_TEMPLATE.to_string());
    };

    let template_path = template_dir.join(USERS_TEMPLATE_NAME);
    match fs::read_to_string(&template_path) {
        Ok(src) => Ok(src),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error reading template {}: {}", template_path.display(), e))),
    }
}

fn get_requested_page(req: &HttpRequest) -> Option<u32> {
    let query_str = req.uri().query()?;
    QueryString::from(query_str).get_page()
}

/// Renders either the load error or the requested page of the loaded users
fn render_users(renderer: &UsersRenderer<'_>, pagination: &Pagination, load_result: &LoadResult, requested_page: Option<u32>) -> String {
    if !load_result.is_ok() {
        return renderer.render_error(load_result.status_code);
    }

    let mut paginator = Paginator::from(&load_result.users, pagination.items_per_page)
        .with_max_page_buttons(pagination.max_page_buttons);
    if let Some(page) = requested_page {
        paginator.go_to_page(page);
    }

    renderer.render(&paginator)
}

#[web::get("/")]
async fn index(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let requested_page = get_requested_page(&req);
    let load_result = load_users(&state.config.backend).await;

    let rendered = render_users(&state.renderer, &state.config.pagination, &load_result, requested_page);
    web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(rendered)
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let renderer = UsersRenderer::new(load_template(&config)?)?;

    info!("Users are fetched from {}", config.backend.users_url);

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let app_state = Arc::new(AppState {
        config,
        renderer,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(index)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
