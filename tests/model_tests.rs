#[cfg(test)]
pub mod model_tests {
    use healsphere::models::*;

    #[test]
    fn test_page_id_parse_success() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>().unwrap(), page);
        }
        assert_eq!("Wellness".parse::<PageId>().unwrap(), PageId::Wellness);
    }

    #[test]
    fn test_page_id_parse_fails_on_unknown() {
        let err = "pricing".parse::<PageId>().unwrap_err();
        assert_eq!(err, "invalid page id: pricing");
    }

    #[test]
    fn test_page_id_unknown_falls_back_to_home() {
        assert_eq!(PageId::parse_or_home("pricing"), PageId::Home);
        assert_eq!(PageId::parse_or_home(""), PageId::Home);
        assert_eq!(PageId::parse_or_home("contact"), PageId::Contact);
        assert_eq!(PageId::default(), PageId::Home);
    }

    #[test]
    fn test_page_id_display_and_label() {
        assert_eq!(PageId::Services.to_string(), "services");
        assert_eq!(PageId::Services.label(), "Services");
        assert_eq!(PageId::About.as_str(), "about");
    }

    #[test]
    fn test_reveal_latch_waits_for_viewport() {
        let mut latch = RevealLatch::default();

        assert!(!latch.observe(false));
        assert!(!latch.is_visible());
        assert_eq!(reveal_classes(RevealFrom::Below, "", latch), "reveal-up");
    }

    #[test]
    fn test_reveal_latch_fires_once() {
        let mut latch = RevealLatch::default();

        assert!(latch.observe(true));
        assert!(latch.is_visible());

        // Scrolling away and back does not replay the animation.
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_reveal_latch_force_shows_content() {
        let mut latch = RevealLatch::default();
        latch.force();

        assert!(latch.is_visible());
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_reveal_classes_gate_animation_on_visible() {
        let mut latch = RevealLatch::default();
        assert_eq!(
            reveal_classes(RevealFrom::Left, "max-w-5xl mx-auto", latch),
            "reveal-left max-w-5xl mx-auto"
        );

        latch.observe(true);
        assert_eq!(
            reveal_classes(RevealFrom::Left, "max-w-5xl mx-auto", latch),
            "reveal-left max-w-5xl mx-auto visible"
        );
        assert_eq!(reveal_classes(RevealFrom::Zoom, "", latch), "reveal-zoom visible");
    }

    #[test]
    fn test_reveal_observer_settings() {
        assert_eq!(REVEAL_THRESHOLD, 0.1);
        assert_eq!(REVEAL_ROOT_MARGIN, "0px 0px -50px 0px");
        assert_eq!(RevealFrom::default(), RevealFrom::Below);
        assert_eq!(RevealFrom::Right.class_name(), "reveal-right");
    }

    #[test]
    fn test_cursor_tracks_pointer() {
        let mut cursor = CursorState::default();
        cursor.move_to(100.0, 40.0);

        assert_eq!(cursor.dot(), CursorTransform { x: 96.0, y: 36.0, scale: 1.0 });
        assert_eq!(cursor.follower(), CursorTransform { x: 84.0, y: 24.0, scale: 1.0 });
    }

    #[test]
    fn test_cursor_hover_scales_up() {
        let mut cursor = CursorState::default();
        cursor.set_hovering(true);

        assert_eq!(cursor.variant, CursorVariant::Hover);
        assert_eq!(cursor.dot().scale, 2.0);
        assert_eq!(cursor.follower().scale, 1.5);

        cursor.set_hovering(false);
        assert_eq!(cursor.variant, CursorVariant::Default);
    }

    #[test]
    fn test_cursor_transform_css() {
        let css = CursorTransform { x: 12.0, y: -4.0, scale: 1.5 }.to_css();
        assert_eq!(css, "transform: translate3d(12px, -4px, 0) scale(1.5);");
    }

    #[test]
    fn test_hero_parallax_progress() {
        assert_eq!(
            hero_parallax(0.0, 800.0),
            HeroParallax { offset_percent: 0.0, opacity: 1.0 }
        );
        assert_eq!(
            hero_parallax(400.0, 800.0),
            HeroParallax { offset_percent: 25.0, opacity: 0.5 }
        );
    }

    #[test]
    fn test_hero_parallax_clamps() {
        assert_eq!(hero_parallax(5000.0, 800.0).opacity, 0.0);
        assert_eq!(hero_parallax(5000.0, 800.0).offset_percent, 50.0);
        assert_eq!(hero_parallax(-20.0, 800.0).opacity, 1.0);
        assert_eq!(hero_parallax(300.0, 0.0).opacity, 1.0);
    }

    #[test]
    fn test_favicon_data_uri_is_encoded_svg() {
        let uri = brand::favicon_data_uri();

        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(!uri.contains('<'));
        assert!(!uri.contains('#'));
    }

    #[test]
    fn test_brand_mailto() {
        assert_eq!(
            brand::mailto(brand::SUPPORT_EMAIL),
            "mailto:support@healsphere.com"
        );
    }
}
