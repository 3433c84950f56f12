use crate::models::*;
use crate::services::LuckyDrawService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/lucky-draw/items",
    tag = "lucky_draw",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Item catalog", body = [LuckyItemResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_items(lucky_draw_service: web::Data<LuckyDrawService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(lucky_draw_service.list_items())))
}

#[utoipa::path(
    post,
    path = "/lucky-draw/entries",
    tag = "lucky_draw",
    request_body = PlaceBetRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Entry placed and drawn", body = PlaceBetResponse),
        (status = 400, description = "Unknown item or insufficient balance"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Another draw is in progress")
    )
)]
pub async fn place_bet(
    lucky_draw_service: web::Data<LuckyDrawService>,
    request: web::Json<PlaceBetRequest>,
) -> Result<HttpResponse> {
    match lucky_draw_service.place_bet(request.into_inner()).await {
        Ok(response) => {
            let message = if response.is_winner {
                "Congratulations, you won!"
            } else {
                "Better luck next time"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(response, message)))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/lucky-draw/entries",
    tag = "lucky_draw",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Page size"),
        ("result" = Option<Outcome>, Query, description = "won or lost")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Entries, newest first, with summary", body = LuckyDrawHistoryResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_entries(
    lucky_draw_service: web::Data<LuckyDrawService>,
    query: web::Query<LuckyDrawEntryQuery>,
) -> Result<HttpResponse> {
    let history = lucky_draw_service.list_entries(&query).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(history)))
}

pub fn lucky_draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lucky-draw")
            .route("/items", web::get().to(get_items))
            .route("/entries", web::post().to(place_bet))
            .route("/entries", web::get().to(get_entries)),
    );
}
