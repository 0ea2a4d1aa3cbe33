mod common;

#[cfg(test)]
pub mod contact_tests {
    use super::common::*;

    use healsphere::common::*;
    use healsphere::models::*;

    #[test]
    fn test_contact_submit_success() {
        let mut form = get_filled_form();

        let ack = form.submit().unwrap();

        assert_eq!(ack.name, "Jane");
        assert_eq!(ack.email, "jane@x.com");
        assert!(ack.message().contains("Jane"));
        assert!(ack.message().contains("jane@x.com"));
    }

    #[test]
    fn test_contact_submit_resets_every_field() {
        let mut form = ContactForm {
            subject: "Billing".to_string(),
            ..get_filled_form()
        };

        form.submit().unwrap();

        assert!(form.is_empty());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_contact_acknowledgement_message() {
        let ack = ContactAcknowledgement {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
        };

        assert_eq!(
            ack.message(),
            "Thank you for your message, Jane! We'll get back to you at jane@x.com within 24 hours."
        );
    }

    #[test]
    fn test_contact_submit_fails_on_empty_name() {
        let mut form = ContactForm {
            name: "".to_string(),
            subject: "Hello".to_string(),
            ..get_filled_form()
        };
        let before = form.clone();

        let err = form.submit().unwrap_err();

        assert_eq!(err, ContactError::MissingFields(vec![ContactField::Name]));
        assert_eq!(err.to_string(), "Please fill in all required fields.");
        assert_eq!(form, before);
    }

    #[test]
    fn test_contact_submit_fails_on_empty_email() {
        let mut form = ContactForm {
            email: "".to_string(),
            ..get_filled_form()
        };

        let err = form.submit().unwrap_err();

        assert_eq!(err.missing_fields(), &[ContactField::Email]);
        assert_eq!(form.name, "Jane");
    }

    #[test]
    fn test_contact_submit_fails_on_empty_message() {
        let mut form = ContactForm {
            message: "".to_string(),
            ..get_filled_form()
        };

        assert_eq!(
            form.submit().unwrap_err().missing_fields(),
            &[ContactField::Message]
        );
    }

    #[test]
    fn test_contact_submit_fails_on_empty_form() {
        let mut form = ContactForm::default();

        let err = form.submit().unwrap_err();

        assert_eq!(
            err.missing_fields(),
            &[ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_contact_subject_is_optional() {
        assert!(!ContactField::Subject.is_required());
        assert!(get_filled_form().missing_fields().is_empty());
    }

    #[test]
    fn test_contact_whitespace_counts_as_content() {
        let mut form = ContactForm {
            name: "   ".to_string(),
            ..get_filled_form()
        };

        let ack = form.submit().unwrap();
        assert_eq!(ack.name, "   ");
    }

    #[test]
    fn test_contact_resubmit_after_fix_success() {
        let mut form = ContactForm {
            name: "".to_string(),
            ..get_filled_form()
        };
        assert!(form.submit().is_err());

        form.name = "Jane".to_string();

        assert!(form.submit().is_ok());
        assert!(form.is_empty());
    }

    #[test]
    fn test_contact_notice_from_submit_success() {
        let mut form = get_filled_form();

        let notice = ContactNotice::from_submit(&form.submit());

        assert!(notice.is_visible());
        assert!(matches!(notice, ContactNotice::Sent(ref text) if text.contains("Jane")));
    }

    #[test]
    fn test_contact_notice_from_rejected_submit() {
        let mut form = ContactForm::default();

        let notice = ContactNotice::from_submit(&form.submit());

        assert_eq!(
            notice,
            ContactNotice::Rejected("Please fill in all required fields.".to_string())
        );
    }

    #[test]
    fn test_contact_notice_dismissed_by_next_edit() {
        let mut form = get_filled_form();
        let mut notice = ContactNotice::from_submit(&form.submit());

        assert!(notice.dismiss());
        assert_eq!(notice, ContactNotice::Hidden);
        assert!(!notice.is_visible());

        // Further typing has nothing left to hide.
        assert!(!notice.dismiss());
    }

    #[test]
    fn test_contact_notice_starts_hidden() {
        assert_eq!(ContactNotice::default(), ContactNotice::Hidden);
        assert!(!ContactNotice::default().is_visible());
    }

    #[test]
    fn test_newsletter_subscribe_acknowledges_any_input() {
        assert_eq!(newsletter::subscribe("jane@x.com"), newsletter::SUBSCRIBE_ACKNOWLEDGEMENT);
        assert_eq!(newsletter::subscribe(""), newsletter::SUBSCRIBE_ACKNOWLEDGEMENT);
    }
}
