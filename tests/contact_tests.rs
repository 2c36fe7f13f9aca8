mod common;

#[cfg(test)]
pub mod contact_tests {
    use super::common::*;

    use delight_school::common::DeliveryError;
    use delight_school::forms::*;

    fn filled_state() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.fields = get_seed_contact_form();
        state
    }

    #[tokio::test]
    async fn test_submit_success_clears_fields() {
        let delivery = MockDelivery::succeeding();
        let mut state = filled_state();

        let notice = state.submit(&delivery).await;

        assert_eq!(notice, Some(Notice::Sent));
        assert!(!state.is_sending());
        assert_eq!(state.fields, ContactForm::default());
        assert_eq!(delivery.calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_fields_and_clears_sending() {
        let delivery = MockDelivery::failing();
        let mut state = filled_state();

        let notice = state.submit(&delivery).await;

        assert_eq!(notice, Some(Notice::Failed));
        assert!(!state.is_sending());
        assert_eq!(state.fields, get_seed_contact_form());
        assert_eq!(delivery.calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_fails_on_incomplete_form() {
        let delivery = MockDelivery::succeeding();
        let mut state = filled_state();
        state.set(ContactField::Email, String::new());

        assert_eq!(state.submit(&delivery).await, None);
        assert_eq!(delivery.calls(), 0);
    }

    #[test]
    fn test_begin_submit_ignored_while_sending() {
        let mut state = filled_state();

        assert!(state.begin_submit().is_some());
        assert!(state.is_sending());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_finish_submit_failure_yields_single_error_notice() {
        let mut state = filled_state();
        state.begin_submit();

        let notice = state.finish_submit(Err(DeliveryError::Rejected {
            status: 400,
            body: "bad template".to_string(),
        }));

        assert!(notice.is_error());
        assert!(notice.message().contains("delightintschool@gmail.com"));
        assert!(!state.is_sending());

        // A new attempt is possible once the previous one has finished.
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_notice_sent_is_not_error() {
        assert!(!Notice::Sent.is_error());
        assert!(Notice::Sent.message().starts_with("Thank you"));
    }
}
