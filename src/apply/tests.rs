#[cfg(test)]
mod apply_tests {
    use crate::apply::apply::{apply_service_routes, run_apply_command};
    use crate::apply::enums::apply_status::ApplyStatus;
    use crate::apply::structs::apply_response::ApplyResponse;
    use crate::apply::structs::apply_service_data::ApplyServiceData;
    use crate::auth::structs::auth_token_holder::AuthTokenHolder;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::App;
    use std::sync::Arc;

    fn service_data(token: &str, command: &[&str], max_body_size: usize) -> Arc<ApplyServiceData> {
        Arc::new(ApplyServiceData {
            token_holder: Arc::new(AuthTokenHolder::new(token.to_string())),
            apply_command: command.iter().map(|c| c.to_string()).collect(),
            max_body_size,
        })
    }

    #[test]
    fn test_apply_response_omits_empty_fields() {
        let response = ApplyResponse::success(String::new());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "success");
        assert!(value.get("output").is_none());
        assert!(value.get("error").is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(value["timestamp"].as_str().unwrap()).is_ok());

        let response = ApplyResponse::failure(String::from("out"), String::from("exit status: 1"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["output"], "out");
        assert_eq!(value["error"], "exit status: 1");
    }

    #[tokio::test]
    async fn test_run_apply_command_echoes_stdin() {
        let command = vec![String::from("cat")];
        let output = run_apply_command(&command, b"  kind: ConfigMap\n").await.unwrap();
        assert_eq!(output, "kind: ConfigMap");
    }

    #[tokio::test]
    async fn test_run_apply_command_failures() {
        let (_, error) = run_apply_command(&[String::from("false")], b"").await.unwrap_err();
        assert!(!error.is_empty());
        let (_, error) = run_apply_command(&[String::from("/nonexistent/certpilot-apply")], b"").await.unwrap_err();
        assert!(error.contains("/nonexistent/certpilot-apply"));
        assert!(run_apply_command(&[], b"").await.is_err());
    }

    #[actix_web::test]
    async fn test_apply_requires_token() {
        let app = actix_test::init_service(App::new().configure(apply_service_routes(service_data("s3cret", &["cat"], 1024)))).await;

        let req = actix_test::TestRequest::post().uri("/apply").set_payload("data").to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = actix_test::TestRequest::post()
            .uri("/apply")
            .insert_header(("Authorization", "Bearer wrong"))
            .set_payload("data")
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = actix_test::TestRequest::post()
            .uri("/apply")
            .insert_header(("Authorization", "Bearer s3cret"))
            .set_payload("data")
            .to_request();
        let response: ApplyResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(response.status, ApplyStatus::Success);
        assert_eq!(response.output, "data");
    }

    #[actix_web::test]
    async fn test_apply_method_and_route() {
        let app = actix_test::init_service(App::new().configure(apply_service_routes(service_data("", &["cat"], 1024)))).await;

        let req = actix_test::TestRequest::get().uri("/apply").to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::METHOD_NOT_ALLOWED);

        let req = actix_test::TestRequest::get().uri("/elsewhere").to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_apply_body_limit() {
        let app = actix_test::init_service(App::new().configure(apply_service_routes(service_data("", &["cat"], 8)))).await;
        let req = actix_test::TestRequest::post().uri("/apply").set_payload("0123456789").to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn test_apply_command_failure_is_500() {
        let app = actix_test::init_service(App::new().configure(apply_service_routes(service_data("", &["false"], 1024)))).await;
        let req = actix_test::TestRequest::post().uri("/apply").set_payload("x").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ApplyResponse = actix_test::read_body_json(resp).await;
        assert_eq!(body.status, ApplyStatus::Error);
        assert!(!body.error.is_empty());
    }

    #[test]
    fn test_service_data_debug_hides_token() {
        let data = service_data("s3cret", &["cat"], 1024);
        assert!(!format!("{:?}", data).contains("s3cret"));
    }
}
