use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use tokio::sync::Mutex;

use memagent_backend::agent::Agent;
use memagent_backend::config::Config;
use memagent_backend::{AppState, controllers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Initializing agent with memory at {}", config.memory_dir);
    let agent = Agent::new(&config).expect("Failed to initialize agent");
    let state = web::Data::new(AppState {
        agent: Mutex::new(agent),
    });

    log::info!("Starting MemAgent server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::chat::config)
            .configure(controllers::memory::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
