use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::domain::filter::FilterState;
use crate::dto::catalog::CatalogPageDto;
use crate::forms::catalog::CatalogQueryForm;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};
use crate::services::catalog::{Catalog, show_catalog as show_catalog_service};
use crate::services::sorting::SortKeyMode;

#[get("/")]
pub async fn index(
    params: web::Query<Vec<(String, String)>>,
    catalog: web::Data<Catalog>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form: CatalogQueryForm = params.into_inner().into_iter().collect();
    let state = match FilterState::try_from(form) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Rejected catalog query: {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    let mode = SortKeyMode::from_flag(server_config.sort_by_column);
    let page = show_catalog_service(catalog.get_ref(), &state, mode);

    let mut context = base_context("index");
    context.insert("catalog", &CatalogPageDto::new(&page, &state));
    render_template(&tera, "main/index.html", &context)
}
