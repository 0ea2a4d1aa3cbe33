mod common;

#[cfg(test)]
pub mod navigation_tests {
    use super::common::*;

    use healsphere::models::*;
    use healsphere::navigation::*;

    #[test]
    fn test_router_starts_on_home() {
        let router = get_router_scrolled(0.0);
        assert_eq!(router.current(), PageId::Home);
    }

    #[test]
    fn test_router_mount_resets_scroll_instantly() {
        let router = get_router_scrolled(640.0);
        router.mount();

        assert_eq!(router.viewport().scroll_y(), 0.0);
        assert_eq!(router.viewport().resets(), vec![ScrollMode::Instant]);
    }

    #[test]
    fn test_router_navigate_every_page_success() {
        let mut router = get_router_scrolled(0.0);

        for page in PageId::ALL {
            router.navigate(page);
            assert_eq!(router.current(), page);
        }
    }

    #[test]
    fn test_router_navigate_resets_scroll_to_top() {
        let mut router = get_router_scrolled(0.0);

        for page in [PageId::About, PageId::Wellness, PageId::Home] {
            router.viewport().scroll_by(1234.0);
            router.navigate(page);
            assert_eq!(router.viewport().scroll_y(), 0.0);
        }

        assert_eq!(router.viewport().resets(), vec![ScrollMode::Instant; 3]);
    }

    #[test]
    fn test_router_navigate_reports_change() {
        let mut router = get_router_scrolled(0.0);

        assert_eq!(
            router.navigate(PageId::Services),
            Navigation::Changed {
                from: PageId::Home,
                to: PageId::Services
            }
        );
    }

    #[test]
    fn test_router_navigate_same_page_is_noop() {
        let mut router = get_router_scrolled(0.0);
        router.navigate(PageId::Contact);
        router.viewport().scroll_by(300.0);

        let second = router.navigate(PageId::Contact);

        assert_eq!(second, Navigation::Unchanged(PageId::Contact));
        assert!(!second.is_changed());
        assert_eq!(router.viewport().scroll_y(), 300.0);
        assert_eq!(router.viewport().resets().len(), 1);
    }

    #[test]
    fn test_navigation_state_navigate_success() {
        let mut state = NavigationState::new(PageId::About);

        assert!(state.navigate(PageId::Home).is_changed());
        assert_eq!(state.current(), PageId::Home);
    }

    #[test]
    fn test_nav_links_follow_page_order() {
        let pages: Vec<PageId> = NAV_LINKS.iter().map(|link| link.page).collect();
        let labels: Vec<&str> = NAV_LINKS.iter().map(|link| link.label).collect();

        assert_eq!(pages, PageId::ALL.to_vec());
        assert_eq!(labels, vec!["Home", "About", "Services", "Wellness", "Contact"]);
    }

    #[test]
    fn test_nav_links_exactly_one_active() {
        for page in PageId::ALL {
            let active: Vec<&NavLink> = NAV_LINKS
                .iter()
                .filter(|link| link.is_active(page))
                .collect();

            assert_eq!(active.len(), 1);
            assert_eq!(active[0].page, page);
            assert_eq!(active_link(page), Some(active[0]));
        }
    }

    #[test]
    fn test_nav_bar_scroll_threshold() {
        let mut state = NavBarState::default();

        state.on_scroll(SCROLL_THRESHOLD);
        assert!(!state.is_scrolled);

        state.on_scroll(SCROLL_THRESHOLD + 0.5);
        assert!(state.is_scrolled);

        state.on_scroll(0.0);
        assert!(!state.is_scrolled);
    }

    #[test]
    fn test_nav_bar_toggle_menu() {
        let mut state = NavBarState::default();

        state.toggle_menu();
        assert!(state.is_mobile_menu_open);

        state.toggle_menu();
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn test_nav_bar_select_from_open_menu_closes_and_navigates() {
        let mut router = get_router_scrolled(0.0);
        let viewport = FakeViewport::scrolled_to(900.0);
        let mut state = NavBarState::default();
        state.toggle_menu();

        state.select(
            PageId::Wellness,
            |page| {
                router.navigate(page);
            },
            &viewport,
        );

        assert!(!state.is_mobile_menu_open);
        assert_eq!(router.current(), PageId::Wellness);
        assert_eq!(viewport.resets(), vec![ScrollMode::Smooth]);
    }

    #[test]
    fn test_nav_bar_select_with_closed_menu_keeps_it_closed() {
        let viewport = FakeViewport::default();
        let mut state = NavBarState::default();
        let mut picked = None;

        state.select(PageId::About, |page| picked = Some(page), &viewport);

        assert!(!state.is_mobile_menu_open);
        assert_eq!(picked, Some(PageId::About));
    }
}
