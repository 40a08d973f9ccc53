mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod routes;
mod store;

use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use crate::config::Config;
use crate::store::{PgStore, Store};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;

    // Nothing listens until the tables exist and the seed has run.
    let pool = db::connect(&config).await.map_err(startup_failure)?;
    db::schema::initialize(&pool, config.seed_data)
        .await
        .map_err(startup_failure)?;

    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
    let store = web::Data::from(store);

    let (host, port) = config.bind_addr();
    info!("listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(routes::configure)
            .default_service(web::to(errors::not_found))
    })
    .bind((host, port))?
    .run()
    .await
}

fn startup_failure(err: sqlx::Error) -> io::Error {
    error!("Error initializing: {}", err);
    io::Error::other(err)
}
