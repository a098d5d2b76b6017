use super::*;

mod list {
    use super::*;

    #[test]
    fn when_values_contain_duplicates_should_keep_first_occurrence_in_order() {
        // Arrange & Act
        let origins = AllowedOrigins::list([
            "http://localhost:5173",
            " http://localhost:3000 ",
            "http://localhost:5173",
        ]);

        // Assert
        assert_eq!(
            origins.entries(),
            &["http://localhost:5173", "http://localhost:3000"]
        );
        assert!(!origins.is_wildcard());
    }

    #[test]
    fn when_values_contain_wildcard_should_set_flag_without_storing_entry() {
        // Arrange & Act
        let origins = AllowedOrigins::list(["http://localhost:5173", "*"]);

        // Assert
        assert!(origins.is_wildcard());
        assert_eq!(origins.entries(), &["http://localhost:5173"]);
    }

    #[test]
    fn when_empty_should_report_empty_set() {
        // Arrange & Act
        let origins = AllowedOrigins::list(Vec::<String>::new());

        // Assert
        assert!(origins.is_empty());
        assert_eq!(origins, AllowedOrigins::none());
    }
}

mod contains {
    use super::*;

    #[test]
    fn when_origin_differs_only_in_case_should_not_match() {
        // Arrange
        let origins = AllowedOrigins::list(["https://app.example"]);

        // Act & Assert
        assert!(origins.contains("https://app.example"));
        assert!(!origins.contains("https://APP.example"));
    }

    #[test]
    fn when_origin_has_trailing_slash_should_not_match() {
        // Arrange
        let origins = AllowedOrigins::list(["https://app.example"]);

        // Act & Assert
        assert!(!origins.contains("https://app.example/"));
    }
}

mod resolve {
    use super::*;

    #[test]
    fn when_origin_is_listed_should_echo_literal_origin() {
        // Arrange
        let origins = AllowedOrigins::list(["http://localhost:5173"]);

        // Act
        let decision = origins.resolve(Some("http://localhost:5173"));

        // Assert
        assert_eq!(
            decision,
            OriginDecision::Exact("http://localhost:5173".to_string())
        );
        assert!(decision.is_granted());
    }

    #[test]
    fn when_origin_is_not_listed_should_disallow() {
        // Arrange
        let origins = AllowedOrigins::list(["http://localhost:5173"]);

        // Act
        let decision = origins.resolve(Some("http://evil.example"));

        // Assert
        assert_eq!(decision, OriginDecision::Disallow);
        assert!(!decision.is_granted());
    }

    #[test]
    fn when_origin_is_missing_or_empty_should_be_absent() {
        // Arrange
        let origins = AllowedOrigins::list(["http://localhost:5173"]);

        // Act & Assert
        assert_eq!(origins.resolve(None), OriginDecision::Absent);
        assert_eq!(origins.resolve(Some("")), OriginDecision::Absent);
    }

    #[test]
    fn when_wildcard_configured_should_grant_any_origin() {
        // Arrange
        let origins = AllowedOrigins::any();

        // Act
        let decision = origins.resolve(Some("http://evil.example"));

        // Assert
        assert_eq!(decision, OriginDecision::Any);
    }

    #[test]
    fn when_origin_exceeds_length_limit_should_disallow_listed_set() {
        // Arrange
        let oversized = format!("https://{}.example", "a".repeat(MAX_ORIGIN_LENGTH));
        let origins = AllowedOrigins::list([oversized.clone()]);

        // Act
        let decision = origins.resolve(Some(&oversized));

        // Assert
        assert_eq!(decision, OriginDecision::Disallow);
    }

    #[test]
    fn when_wildcard_and_origin_missing_should_grant_any() {
        // Arrange
        let origins = AllowedOrigins::any();

        // Act & Assert
        assert_eq!(origins.resolve(None), OriginDecision::Any);
        assert_eq!(origins.resolve(Some("")), OriginDecision::Any);
    }

    #[test]
    fn when_wildcard_and_origin_oversized_should_grant_any() {
        // Arrange
        let origins = AllowedOrigins::any();
        let oversized = format!("https://{}.example", "a".repeat(MAX_ORIGIN_LENGTH));

        // Act
        let decision = origins.resolve(Some(&oversized));

        // Assert
        assert_eq!(decision, OriginDecision::Any);
    }
}

mod varies_by_origin {
    use super::*;

    #[test]
    fn when_wildcard_should_not_vary() {
        assert!(!AllowedOrigins::any().varies_by_origin());
    }

    #[test]
    fn when_explicit_list_should_vary() {
        assert!(AllowedOrigins::list(["https://app.example"]).varies_by_origin());
        assert!(AllowedOrigins::none().varies_by_origin());
    }
}

mod first_invalid {
    use super::*;

    #[test]
    fn when_all_entries_are_serialized_origins_should_return_none() {
        // Arrange
        let origins = AllowedOrigins::list([
            "http://localhost:5173",
            "https://your-production-domain.com",
            "https://www.your-production-domain.com:8443",
        ]);

        // Act & Assert
        assert_eq!(origins.first_invalid(), None);
    }

    #[test]
    fn when_entry_has_path_should_return_it() {
        // Arrange
        let origins = AllowedOrigins::list(["http://localhost:5173", "https://app.example/login"]);

        // Act & Assert
        assert_eq!(origins.first_invalid(), Some("https://app.example/login"));
    }

    #[test]
    fn when_entry_lacks_scheme_should_return_it() {
        // Arrange
        let origins = AllowedOrigins::list(["localhost:5173"]);

        // Act & Assert
        assert_eq!(origins.first_invalid(), Some("localhost:5173"));
    }
}
