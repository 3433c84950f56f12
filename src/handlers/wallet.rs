use crate::models::*;
use crate::services::WalletService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/wallet",
    tag = "wallet",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Balance and processing flag", body = WalletResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_wallet(wallet_service: web::Data<WalletService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(wallet_service.wallet().await)))
}

#[utoipa::path(
    post,
    path = "/wallet/deposit",
    tag = "wallet",
    request_body = WalletAmountRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Deposit booked", body = WalletOperationResponse),
        (status = 400, description = "Invalid amount"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn deposit(
    wallet_service: web::Data<WalletService>,
    request: web::Json<WalletAmountRequest>,
) -> Result<HttpResponse> {
    match wallet_service.deposit(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/wallet/withdraw",
    tag = "wallet",
    request_body = WalletAmountRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Withdrawal booked", body = WalletOperationResponse),
        (status = 400, description = "Invalid amount or insufficient balance"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn withdraw(
    wallet_service: web::Data<WalletService>,
    request: web::Json<WalletAmountRequest>,
) -> Result<HttpResponse> {
    match wallet_service.withdraw(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/wallet/transactions",
    tag = "wallet",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Page size"),
        ("type" = Option<TransactionType>, Query, description = "bet, win, deposit or withdraw")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Ledger, newest first"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_transactions(
    wallet_service: web::Data<WalletService>,
    query: web::Query<TransactionQuery>,
) -> Result<HttpResponse> {
    let page = wallet_service.list_transactions(&query).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(page)))
}

pub fn wallet_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/wallet")
            .route("", web::get().to(get_wallet))
            .route("/deposit", web::post().to(deposit))
            .route("/withdraw", web::post().to(withdraw))
            .route("/transactions", web::get().to(get_transactions)),
    );
}
