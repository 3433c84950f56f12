use crate::models::*;
use crate::services::JackpotService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/jackpot/info",
    tag = "jackpot",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Prices, payout table and next draw", body = JackpotInfoResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_info(jackpot_service: web::Data<JackpotService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(jackpot_service.info())))
}

#[utoipa::path(
    post,
    path = "/jackpot/tickets",
    tag = "jackpot",
    request_body = PurchaseTicketRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Ticket bought and settled", body = PurchaseTicketResponse),
        (status = 400, description = "Invalid numbers, multiplier or balance"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Another draw is in progress")
    )
)]
pub async fn purchase_ticket(
    jackpot_service: web::Data<JackpotService>,
    request: web::Json<PurchaseTicketRequest>,
) -> Result<HttpResponse> {
    match jackpot_service.purchase(request.into_inner()).await {
        Ok(response) => {
            let message = if response.is_winner {
                "Congratulations, your ticket won!"
            } else {
                "No win this time"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(response, message)))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/jackpot/tickets",
    tag = "jackpot",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Page size"),
        ("status" = Option<Outcome>, Query, description = "won or lost")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tickets, newest first"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_tickets(
    jackpot_service: web::Data<JackpotService>,
    query: web::Query<TicketQuery>,
) -> Result<HttpResponse> {
    let page = jackpot_service.list_tickets(&query).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(page)))
}

pub fn jackpot_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jackpot")
            .route("/info", web::get().to(get_info))
            .route("/tickets", web::post().to(purchase_ticket))
            .route("/tickets", web::get().to(get_tickets)),
    );
}
