use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use employee_directory_backend::handlers;
use employee_directory_backend::services::employee::EmployeeDirectory;
use employee_directory_backend::store::memory::InMemoryEmployeeStore;

fn employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/v1/employee")
            .route(web::post().to(handlers::employee::create_employee))
            .route(web::get().to(handlers::employee::get_employees)),
    )
    .service(
        web::resource("/v1/employee/{employee_id}")
            .route(web::get().to(handlers::employee::get_employee))
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    );
}

fn directory_data() -> web::Data<EmployeeDirectory> {
    web::Data::new(EmployeeDirectory::new(Arc::new(InMemoryEmployeeStore::new())))
}

#[actix_web::test]
async fn create_returns_201_with_assigned_id() {
    let app = test::init_service(
        App::new()
            .app_data(directory_data())
            .configure(employee_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/employee")
        .set_json(json!({ "email": "a@x.com", "name": "A" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["name"], "A");
    assert!(body["employeeId"].is_string());
}

#[actix_web::test]
async fn duplicate_email_returns_409() {
    let app = test::init_service(
        App::new()
            .app_data(directory_data())
            .configure(employee_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/employee")
        .set_json(json!({ "email": "a@x.com", "name": "A" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/v1/employee")
        .set_json(json!({ "email": "a@x.com", "name": "B" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email already exists: a@x.com");
}

#[actix_web::test]
async fn get_on_unknown_id_returns_404() {
    let app = test::init_service(
        App::new()
            .app_data(directory_data())
            .configure(employee_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/v1/employee/0a0b0c0d-0000-4000-8000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_id_returns_400() {
    let app = test::init_service(
        App::new()
            .app_data(directory_data())
            .configure(employee_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/v1/employee/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn invalid_email_returns_400() {
    let app = test::init_service(
        App::new()
            .app_data(directory_data())
            .configure(employee_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/employee")
        .set_json(json!({ "email": "not-an-email", "name": "A" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn full_lifecycle_over_http() {
    let app = test::init_service(
        App::new()
            .app_data(directory_data())
            .configure(employee_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/employee")
        .set_json(json!({ "email": "a@x.com", "name": "A", "department": "Engineering" }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["employeeId"].as_str().unwrap().to_string();

    // Full replace; the id in the payload is ignored in favor of the path.
    let req = test::TestRequest::put()
        .uri(&format!("/v1/employee/{}", id))
        .set_json(json!({
            "employeeId": "ffffffff-ffff-4fff-8fff-ffffffffffff",
            "email": "b@x.com",
            "name": "A2"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["employeeId"], id.as_str());
    assert_eq!(updated["email"], "b@x.com");
    assert_eq!(updated["name"], "A2");

    let req = test::TestRequest::get().uri("/v1/employee").to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/employee/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Employee deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/v1/employee/{}", id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
