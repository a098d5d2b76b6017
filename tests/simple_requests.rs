mod common;

use common::asserts::{assert_actual, has_header, header_value, vary_entries};
use common::builders::{actual_request, policy};
use cors_filter_rs::constants::{header, method};

mod evaluate {
    use super::*;

    #[test]
    fn should_echo_origin_when_listed_then_skip_short_circuit() {
        let policy = policy().origins(["http://localhost:5173"]).build();

        let headers = assert_actual(
            actual_request()
                .origin("http://localhost:5173")
                .evaluate(&policy),
        );

        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("http://localhost:5173"),
        );
        assert!(vary_entries(&headers).contains(&header::ORIGIN));
    }

    #[test]
    fn should_omit_allow_origin_when_origin_unlisted_then_keep_policy_headers() {
        let policy = policy().origins(["http://localhost:5173"]).build();

        let headers = assert_actual(
            actual_request()
                .origin("http://evil.example")
                .evaluate(&policy),
        );

        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_METHODS),
            Some("GET, POST, OPTIONS"),
        );
        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_MAX_AGE),
            Some("86400"),
        );
    }

    #[test]
    fn should_omit_sensitive_headers_when_origin_disallowed_then_exclude_sensitive() {
        let policy = policy()
            .origins(["https://allowed.example"])
            .credentials(true)
            .exposed_headers(["X-Trace"])
            .build();

        let headers = assert_actual(
            actual_request()
                .origin("https://deny.example")
                .evaluate(&policy),
        );

        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(!has_header(
            &headers,
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS
        ));
        assert!(!has_header(&headers, header::ACCESS_CONTROL_EXPOSE_HEADERS));
        assert!(has_header(&headers, header::VARY));
    }

    #[test]
    fn should_emit_expose_headers_when_configured_then_return_value() {
        let policy = policy()
            .origins(["https://app.example"])
            .exposed_headers(["Content-Type", "X-CSRFToken"])
            .build();

        let headers = assert_actual(
            actual_request()
                .origin("https://app.example")
                .evaluate(&policy),
        );

        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some("Content-Type, X-CSRFToken"),
        );
    }

    #[test]
    fn should_treat_missing_origin_as_no_match_then_still_emit_policy_headers() {
        let policy = policy().origins(["https://app.example"]).build();

        let headers = assert_actual(actual_request().evaluate(&policy));

        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(has_header(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS));
    }

    #[test]
    fn should_not_filter_methods_when_method_unlisted_then_still_decide_on_origin() {
        let policy = policy()
            .origins(["https://app.example"])
            .methods([method::POST])
            .build();

        let decision = common::builders::RequestBuilder::new(method::DELETE)
            .origin("https://app.example")
            .evaluate(&policy);

        assert_eq!(decision.allow_origin(), Some("https://app.example"));
        assert!(!decision.short_circuit);
    }
}
