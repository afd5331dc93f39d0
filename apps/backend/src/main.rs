use actix_web::{web, App, HttpServer};
use tourney_backend::config::Config;
use tourney_backend::infra::state::build_state;
use tourney_backend::middleware::request_trace::RequestTrace;
use tourney_backend::middleware::structured_logger::StructuredLogger;
use tourney_backend::middleware::trace_span::TraceSpan;
use tourney_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker --env-file, or `set -a; . ./.env; set +a` locally).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let builder = match build_state().with_config(&config).await {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("❌ Failed to connect backing services: {e}");
            std::process::exit(1);
        }
    };
    let app_state = match builder.build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %config.host,
        port = config.port,
        base_url = %config.base_url,
        persistent_store = config.redis_url.is_some(),
        rewards_enabled = config.syndicate_api_key.is_some(),
        "Starting tournament frame server"
    );

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
