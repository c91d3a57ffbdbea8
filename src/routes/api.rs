use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::filter::FilterState;
use crate::forms::catalog::CatalogQueryForm;
use crate::models::config::ServerConfig;
use crate::services::catalog::{Catalog, prepare_products};
use crate::services::sorting::SortKeyMode;

/// Visible products for the filter state in the query string, as JSON.
#[get("/api/v1/products")]
pub async fn api_v1_products(
    params: web::Query<Vec<(String, String)>>,
    catalog: web::Data<Catalog>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form: CatalogQueryForm = params.into_inner().into_iter().collect();
    let state = match FilterState::try_from(form) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Rejected catalog API query: {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    let mode = SortKeyMode::from_flag(server_config.sort_by_column);
    HttpResponse::Ok().json(prepare_products(catalog.get_ref(), &state, mode))
}
