use actix_web::{web, App, HttpServer};
use quotes_backend::config::app::AppConfig;
use quotes_backend::infra::state::build_state;
use quotes_backend::middleware::request_trace::RequestTrace;
use quotes_backend::middleware::structured_logger::StructuredLogger;
use quotes_backend::middleware::trace_span::TraceSpan;
use quotes_backend::routes;
use quotes_backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A local .env is optional; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(config.db_url.clone())
        .with_security(config.security())
        .with_env(config.env)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Connected to Database");

    let data = web::Data::new(app_state);
    let port = config.port();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), port))?;

    tracing::info!(host = %config.host, port, env = ?config.env, "listening on {port}");

    server.run().await
}
