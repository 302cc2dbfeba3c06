use actix_web::web;

pub mod routes {
    pub mod info;
    pub mod serial;
}

mod service {
    pub(crate) mod serial;
}
mod dtos {
    pub(crate) mod serial;
}

/// Serial key endpoints, meant to live under `/api`.
pub fn mount_serials(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::serial::post_add_serial)
        .service(routes::serial::get_check_serial)
        .service(routes::serial::post_list_serials)
        .service(routes::serial::post_deactivate_serial)
        .service(routes::info::get_admin_info);
}

/// Root level service info and health check.
pub fn mount_info(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::info::get_home)
        .service(routes::info::get_health);
}
