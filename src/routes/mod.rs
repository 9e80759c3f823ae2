use actix_web::web;

pub mod admin;
pub mod feed;
pub mod health;
pub mod matches;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health);

    // Operator surface
    cfg.service(
        web::scope("/api/admin")
            .service(admin::create_match)
            .service(admin::list_matches)
            .service(admin::start_match)
            .service(admin::finish_match)
            .service(admin::add_event),
    );

    // Spectator surface. Literal segments are registered before `{id}` so
    // `/live` and `/stream/live` never match as match ids.
    cfg.service(
        web::scope("/api/matches")
            .service(matches::get_live_matches)
            .route("/stream/live", web::get().to(feed::live_feed_route))
            .route("/{id}/stream", web::get().to(feed::match_feed_route))
            .service(matches::get_all_matches)
            .service(matches::get_match),
    );
}
