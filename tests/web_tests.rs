mod common;

#[cfg(test)]
pub mod web_tests {
    use actix_web::{test, web, App, HttpResponse};

    use delight_school::web::middleware::SECURITY_HEADERS;
    use delight_school::web::SecurityHeaders;

    #[actix_web::test]
    async fn test_security_headers_on_every_response() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders)
                .route("/", web::get().to(HttpResponse::Ok))
                .route("/missing", web::get().to(HttpResponse::NotFound)),
        )
        .await;

        for path in ["/", "/missing"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let res = test::call_service(&app, req).await;

            for (name, value) in SECURITY_HEADERS {
                let header = res.headers().get(name).unwrap_or_else(|| panic!("{name} missing on {path}"));
                assert_eq!(header.to_str().unwrap(), value);
            }
        }
    }

    #[actix_web::test]
    async fn test_csp_allows_remote_photos() {
        let (_, csp) = SECURITY_HEADERS
            .iter()
            .find(|(name, _)| *name == "content-security-policy")
            .unwrap();

        assert!(csp.contains("https://images.unsplash.com"));
        assert!(csp.contains("'wasm-unsafe-eval'"));
    }
}
