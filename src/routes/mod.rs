use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Registers every catalog route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index).service(api::api_v1_products);
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}
