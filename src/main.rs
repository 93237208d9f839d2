mod api;
mod backend;
mod banner;
mod config;
mod errors;
mod models;

use actix_web::{web, App, HttpServer, middleware};
use actix_cors::Cors;
use api::{configure_routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    // A missing .env file is fine; COLAB_BACKEND_URL may come from the shell
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  No .env file loaded: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env()
        .expect("Failed to load app configuration from environment");

    let port = app_config.port;

    println!("🚀 Starting relay server...");
    println!("📡 Server running on: http://localhost:{}", port);
    println!("🔗 Colab backend URL: {}", app_config.backend_url);
    println!("💡 To set the backend URL: export COLAB_BACKEND_URL='your_ngrok_url'");

    let state = AppState::new(app_config);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .route("/{_:.*}", web::get().to(api::static_files::static_file_handler))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
