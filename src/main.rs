use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use betbliss_backend::{
    config::Config,
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    storage::create_storage,
    swagger::swagger_config,
    utils::{JwtService, StdRandom, TokioDelay},
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    let storage = create_storage(&config.storage)?;
    if config.game.rng_seed.is_some() {
        log::warn!("RNG seed is set, draws are reproducible");
    }
    let store = GameStore::new(
        storage,
        Box::new(StdRandom::new(config.game.rng_seed)),
        Arc::new(TokioDelay),
        &config.game,
    );

    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    let notification_service = NotificationService::new();
    let user_service = UserService::new(store.clone(), &config.auth);
    let auth_service = AuthService::new(
        jwt_service.clone(),
        user_service.clone(),
        config.auth.clone(),
    );
    let jackpot_service =
        JackpotService::new(store.clone(), notification_service.clone(), &config.game);
    let lucky_draw_service = LuckyDrawService::new(store.clone(), notification_service.clone());
    let wallet_service = WalletService::new(store.clone(), notification_service.clone());
    let admin_service = AdminService::new(store.clone(), user_service.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            // Last wrap is outermost.
            .wrap(AuthMiddleware::new(
                jwt_service.clone(),
                user_service.clone(),
            ))
            .wrap(create_cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(jackpot_service.clone()))
            .app_data(web::Data::new(lucky_draw_service.clone()))
            .app_data(web::Data::new(wallet_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .app_data(web::Data::new(admin_service.clone()))
            .configure(swagger_config)
            .service(web::scope("/api/v1").configure(handlers::api_config))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
