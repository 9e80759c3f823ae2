use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

use crate::db::MatchRepository;
use crate::routes::init_routes;

pub fn run(
    listener: TcpListener,
    repository: Arc<dyn MatchRepository>,
    client_url: String,
) -> Result<Server, std::io::Error> {
    // web::Data::from keeps the trait object behind one shared Arc
    let repository_data: web::Data<dyn MatchRepository> = web::Data::from(repository);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&client_url)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
                http::header::UPGRADE,
                http::header::CONNECTION,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(repository_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
