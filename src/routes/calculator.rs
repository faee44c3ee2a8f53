use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::calculator::CalculatorQuery;
use crate::services::calculator::quote;

#[get("/v1/price")]
pub async fn api_v1_price(params: web::Query<CalculatorQuery>) -> impl Responder {
    match quote(params.into_inner()) {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(err) => HttpResponse::BadRequest().body(err.to_string()),
    }
}
