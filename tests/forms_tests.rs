mod common;

#[cfg(test)]
pub mod forms_tests {
    use super::common::*;

    use delight_school::forms::*;

    #[test]
    fn test_compose_body_keeps_order() {
        let body = compose_body(&[("B", "2"), ("A", "1")]);
        assert_eq!(body, "B: 2\nA: 1");
    }

    #[test]
    fn test_mailto_uri_encodes_reserved_characters() {
        let uri = mailto_uri("a@b.com", "Hi & bye", "x=1?\ny");
        assert_eq!(uri, "mailto:a@b.com?subject=Hi%20%26%20bye&body=x%3D1%3F%0Ay");
    }

    #[test]
    fn test_apply_mailto_lines_in_declared_order() {
        let form = get_seed_apply_form();
        let (to, subject, body) = decode_mailto(&form.mailto());

        assert_eq!(to, "delightintschool@gmail.com");
        assert_eq!(subject, "New Student Application");

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Full Name: Ama Mensah",
                "Date of Birth: 2018-03-14",
                "Gender: female",
                "Applying for Grade: Primary",
                "Parent/Guardian Name: Kofi Mensah",
                "Parent Contact: +233 24 000 0000",
                "Residential Address: 12 Ring Road, Kotobabi",
            ]
        );
    }

    #[test]
    fn test_apply_take_submission_resets_fields() {
        let mut form = get_seed_apply_form();
        let expected = form.mailto();

        let uri = form.take_submission();

        assert_eq!(uri, Some(expected));
        assert_eq!(form, ApplyForm::default());
        for field in ApplyField::ALL {
            assert!(form.get(field).is_empty());
        }
    }

    #[test]
    fn test_apply_take_submission_fails_on_missing_field() {
        let mut form = get_seed_apply_form();
        form.set(ApplyField::Grade, "   ".to_string());
        let before = form.clone();

        assert_eq!(form.take_submission(), None);
        assert_eq!(form, before);
    }

    #[test]
    fn test_apply_set_updates_only_that_field() {
        let mut form = ApplyForm::default();
        form.set(ApplyField::ParentContact, "0244".to_string());

        assert_eq!(form.parent_contact, "0244");
        assert!(!form.is_complete());
    }

    #[test]
    fn test_grade_options_value_matches_text() {
        let grades: Vec<&str> = GRADE_OPTIONS.iter().map(|(value, _)| *value).collect();
        assert_eq!(grades, vec!["Nursery", "Kindergarten", "Primary", "JHS"]);
        assert!(GRADE_OPTIONS.iter().all(|(value, text)| value == text));
    }

    #[test]
    fn test_contact_mailto_lines_in_declared_order() {
        let form = get_seed_contact_form();
        let (to, subject, body) = decode_mailto(&form.mailto());

        assert_eq!(to, "delightintschool@gmail.com");
        assert_eq!(subject, "Website Enquiry");
        assert_eq!(
            body,
            "Full Name: Esi Owusu\nEmail: esi@example.com\nMessage: When does the next term begin?\nThank you."
        );
    }

    #[test]
    fn test_contact_validate_success() {
        assert!(get_seed_contact_form().validate().is_ok());
    }

    #[test]
    fn test_contact_validate_fails_on_bad_email() {
        let mut form = get_seed_contact_form();
        form.email = "esi.example.com".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_contact_validate_fails_on_empty_message() {
        let mut form = get_seed_contact_form();
        form.message = "\n ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("  first.last@school.edu.gh "));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@@b.com"));
        assert!(!looks_like_email("a@.com"));
        assert!(!looks_like_email(""));
    }

    #[test]
    fn test_contact_to_message_trims_sender() {
        let mut form = get_seed_contact_form();
        form.full_name = "  Esi Owusu ".to_string();
        let message = form.to_message("office@school.test");

        assert_eq!(message.from_name, "Esi Owusu");
        assert_eq!(message.from_email, "esi@example.com");
        assert_eq!(message.to_email, "office@school.test");
    }
}
