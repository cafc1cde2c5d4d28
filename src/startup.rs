use actix_cors::Cors;
use actix_web::{dev::Server, http, web, web::Data, App, HttpServer};
use actix_web::{error::ErrorBadRequest, web::JsonConfig};
use actix_web_opentelemetry::RequestTracing;
use serde_json::json;
use std::net::TcpListener;

use crate::config::Settings;
use crate::controllers::plant_routes;
use crate::database::DbPool;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(settings: Settings, db_pool: DbPool) -> Application {
        // Web server configuration
        let (port, listener) = web_server_config(&settings);

        let server = HttpServer::new(move || {
            let mut cors = if settings.server.allow_localhost_cors {
                Cors::default().allowed_origin_fn(|origin, _req_head| match origin.to_str() {
                    Ok(str) => str.contains("localhost"),
                    Err(_) => false,
                })
            } else {
                Cors::default()
            };

            cors = cors
                .allowed_methods(vec!["GET", "OPTION", "POST"])
                .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
                .max_age(3600);

            App::new()
                .wrap(cors)
                .wrap(RequestTracing::new())
                // HTTP API Routes
                .service(web::scope("/plant").configure(plant_routes))
                // Application configuration
                .app_data(Self::json_cfg())
                .app_data(Data::new(settings.clone()))
                .app_data(Data::new(db_pool.clone()))
        })
        .listen(listener)
        .unwrap_or_else(|_| panic!("Could not listen on port {}", port))
        .run();

        Application { server, port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }

    fn json_cfg() -> JsonConfig {
        JsonConfig::default().error_handler(|err, _req| {
            ErrorBadRequest(json!({
                "message": err.to_string()
            }))
        })
    }
}

fn web_server_config(settings: &Settings) -> (u16, TcpListener) {
    let address = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(address).expect("Could not bind server address.");

    let port = listener
        .local_addr()
        .expect("Could not get server address.")
        .port();

    (port, listener)
}
