use actix_files::Files;
use actix_web::{App, HttpServer, middleware};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    // The pathfinding engine writes its JSON outputs here
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

    println!("Starting server on 0.0.0.0:{port}, serving data from {data_dir}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/data", data_dir.clone()))
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
