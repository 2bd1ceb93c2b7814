use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use employee_directory_backend::db;
use employee_directory_backend::handlers;
use employee_directory_backend::services::employee::EmployeeDirectory;
use employee_directory_backend::store::postgres::PgEmployeeStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Initialize the database pool and make sure the schema exists
    let pool = db::create_pool().await;
    db::ensure_schema(&pool)
        .await
        .expect("Failed to initialize the database schema");

    let directory = web::Data::new(EmployeeDirectory::new(Arc::new(PgEmployeeStore::new(pool))));

    info!("Starting server at 127.0.0.1:8080");

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(directory.clone())
            .service(
                web::resource("/v1/employee")
                    .route(web::post().to(handlers::employee::create_employee))
                    .route(web::get().to(handlers::employee::get_employees)),
            )
            .service(
                web::resource("/v1/employee/{employee_id}")
                    .route(web::get().to(handlers::employee::get_employee))
                    .route(web::put().to(handlers::employee::update_employee))
                    .route(web::delete().to(handlers::employee::delete_employee)),
            )
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
