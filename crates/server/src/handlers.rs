use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use oxo_hosting::Lobby;

/// Liveness probe. The relay keeps everything in memory, so there are no
/// backing services to check.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Upgrades the request to a WebSocket and hands it to the lobby.
pub async fn connect(
    lobby: web::Data<Lobby>,
    req: HttpRequest,
    body: web::Payload,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match lobby.bridge(session, stream).await {
            Ok(()) => response.map_into_left_body(),
            Err(e) => HttpResponse::InternalServerError()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
