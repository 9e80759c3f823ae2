use actix_web::{get, web, Responder};

use crate::db::MatchRepository;
use crate::handlers::health_handler::health_check;

#[get("/api/health")]
async fn health(repository: web::Data<dyn MatchRepository>) -> impl Responder {
    health_check(repository).await
}
