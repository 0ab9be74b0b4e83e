use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod models;
mod service;
mod store;

use service::NotesService;
use store::NoteStore;

pub struct AppState {
    pub notes: NotesService,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let port = config::port();

    // The store is the single owner of note state; every worker shares it
    // through the service façade. State is volatile and lost on restart.
    let store = Arc::new(NoteStore::new());

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Starting server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                notes: NotesService::new(Arc::clone(&store)),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
