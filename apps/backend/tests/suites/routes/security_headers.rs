use actix_web::test;
use taskline_backend::middleware::request_trace::TRACE_ID_HEADER;
use taskline_backend::AppError;

use crate::support::test_state::build_state_without_db;
use crate::support::create_test_app;

#[actix_web::test]
async fn hardening_headers_on_success_and_error() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for uri in ["/api/health-check", "/missing"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let headers = resp.headers();

        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
        assert_eq!(headers.get("cache-control").unwrap(), "no-store");
        assert!(headers.contains_key("content-security-policy"));
        assert!(headers.contains_key(TRACE_ID_HEADER), "{uri} lacks x-trace-id");
    }
    Ok(())
}
