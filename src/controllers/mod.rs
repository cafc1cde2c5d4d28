use actix_web::web::ServiceConfig;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

pub mod care_event;
pub mod plant;

/// Generic acknowledgment returned by write endpoints that report no data.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status_code: u16,
}

impl ApiStatus {
    pub fn ok() -> HttpResponse {
        HttpResponse::Ok().json(Self { status_code: 200 })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
}

/// Helper methods for api JSON responses that return no data.
impl ApiResponse {
    pub fn bad_request(message: String) -> HttpResponse {
        HttpResponse::BadRequest().json(Self { message })
    }

    pub fn internal_server_error() -> HttpResponse {
        HttpResponse::InternalServerError().json(Self {
            message: "Internal server error".to_string(),
        })
    }

    pub fn not_found(message: String) -> HttpResponse {
        HttpResponse::NotFound().json(Self { message })
    }
}

pub fn plant_routes(cfg: &mut ServiceConfig) {
    cfg.service(plant::plants);
    cfg.service(plant::plant_names);
    cfg.service(plant::create_plant);
    cfg.service(plant::update_plant);
    cfg.service(care_event::water);
    cfg.service(care_event::fertilize);
    cfg.service(care_event::repot);
}
