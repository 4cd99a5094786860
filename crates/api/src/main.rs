#[macro_use]
extern crate rocket;

pub mod routes;
pub mod util;

use log::info;
use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;
use std::str::FromStr;
use trailhead_database::{Database, DatabaseInfo};

/// Build the web server
pub async fn web(db: Database) -> Rocket<Build> {
    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: ["Get", "Put", "Post", "Delete", "Options", "Head", "Patch"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    routes::mount(rocket::build())
        .mount("/", rocket_cors::catch_all_options_routes())
        .register("/", util::catchers::all_catchers())
        .manage(db)
        .manage(cors.clone())
        .attach(cors)
}

#[launch]
async fn rocket() -> _ {
    pretty_env_logger::init();

    info!(
        "Starting Trailhead API [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    trailhead_config::init().await;

    // Setup database
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Failed to connect to the database.");

    web(db).await
}
