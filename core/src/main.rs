mod cors;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::{admin::AdminGate, env_config::Config, http};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let console_logging_enabled = config.console_logging_enabled;
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if console_logging_enabled {
        logger::setup(&config.log_file).expect("Failed to set up logger");
    }
    log::info!(
        "Starting in {} mode on {}:{}",
        config.environment,
        config.server_host,
        config.server_port
    );
    if config.is_production() && origin == "*" {
        log::warn!("CORS accepts any origin in production");
    }
    if config.uses_default_admin_password() {
        log::warn!("ADMIN_PASSWORD is not set, using the default admin password");
    }

    // init store and admin gate
    let store = db::setup(config.seed_demo_data);
    let gate = AdminGate::new(&config.admin_password).expect("Failed to hash admin password");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(gate.clone()))
            .app_data(http::json_config())
            .app_data(http::path_config())
            .app_data(http::query_config())
            .wrap(logger::middleware(console_logging_enabled)) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .configure(api_serials::mount_info)
            .service(
                web::scope("/api")
                    .configure(api_demo::mount_info)
                    .configure(api_serials::mount_serials)
                    .service(api_demo::mount_users())
                    .service(api_demo::mount_products())
                    .service(api_demo::mount_posts()),
            )
            .default_service(web::to(http::not_found))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
