use actix_cors::Cors;
use actix_web::http::header;

/// CORS for the configured browser origins.
///
/// Entries that are empty, `null`, or not http(s) are ignored; if nothing
/// valid remains, only `http://localhost:4200` is allowed.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut allowed: Vec<&str> = origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .collect();

    if allowed.is_empty() {
        allowed.push("http://localhost:4200");
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in allowed {
        cors = cors.allowed_origin(origin);
    }

    cors
}
