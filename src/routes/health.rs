use actix_web::{get, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire form of the liveness probe.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Liveness probe. Sits outside the auth gate so connectivity checks can hit
/// it without credentials.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_rt::test]
    async fn test_health_reports_ok_with_current_timestamp() {
        let app = test::init_service(App::new().service(health)).await;

        let before = Utc::now();
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body: HealthStatus = test::read_body_json(resp).await;
        assert_eq!(body.status, "ok");
        assert!(body.timestamp >= before);
        assert!(body.timestamp <= Utc::now());
    }
}
