mod common;

#[cfg(test)]
pub mod transition_tests {
    use std::time::Duration;

    use super::common::*;

    use healsphere::models::*;
    use healsphere::navigation::*;

    #[test]
    fn test_initial_page_plays_entrance() {
        let host = TransitionHost::new(PageId::Home, TransitionTimings::default());
        let animation = host.in_flight().unwrap();

        assert_eq!(animation.page, PageId::Home);
        assert_eq!(animation.phase, Phase::Entering);
        assert_eq!(animation.duration, Duration::from_millis(250));
        assert!(!host.is_settled());
    }

    #[test]
    fn test_settled_host_owes_nothing() {
        let host = get_settled_host(PageId::Home);

        assert!(host.is_settled());
        assert_eq!(host.displayed().phase, Phase::Active);
        assert_eq!(host.in_flight(), None);
    }

    #[test]
    fn test_request_exits_then_enters() {
        let mut host = get_settled_host(PageId::Home);

        let exit = host.request(PageId::About).unwrap();
        assert_eq!((exit.page, exit.phase), (PageId::Home, Phase::Exiting));
        assert_eq!(exit.duration, Duration::from_millis(150));
        assert_eq!(host.pending(), Some(PageId::About));
        assert_eq!(host.target(), PageId::About);

        let enter = host.complete(exit.ticket).unwrap();
        assert_eq!((enter.page, enter.phase), (PageId::About, Phase::Entering));
        assert_eq!(host.pending(), None);

        assert_eq!(host.complete(enter.ticket), None);
        assert!(host.is_settled());
        assert_eq!(host.displayed().page, PageId::About);
    }

    #[test]
    fn test_every_page_settles_alone() {
        let mut host = get_settled_host(PageId::Home);

        for page in PageId::ALL.into_iter().rev() {
            let first = host.request(page);
            settle(&mut host, first);

            assert!(host.is_settled());
            assert_eq!(host.displayed().page, page);
            assert_eq!(host.pending(), None);
        }
    }

    #[test]
    fn test_request_same_page_is_noop() {
        let mut host = get_settled_host(PageId::Services);

        assert_eq!(host.request(PageId::Services), None);
        assert!(host.is_settled());
    }

    #[test]
    fn test_request_pending_target_again_is_noop() {
        let mut host = get_settled_host(PageId::Home);
        let exit = host.request(PageId::About).unwrap();

        assert_eq!(host.request(PageId::About), None);
        assert_eq!(host.in_flight(), Some(exit));
    }

    #[test]
    fn test_latest_request_wins_during_exit() {
        let mut host = get_settled_host(PageId::Home);

        let exit = host.request(PageId::About).unwrap();
        let enter = host.request(PageId::Contact).unwrap();

        // The abandoned exit is dropped; the newest target enters at once.
        assert_eq!((enter.page, enter.phase), (PageId::Contact, Phase::Entering));
        assert_eq!(host.pending(), None);
        assert_eq!(host.complete(exit.ticket), None);
        assert_eq!(host.displayed().phase, Phase::Entering);

        let fired = settle(&mut host, Some(enter));
        assert_eq!(fired.len(), 1);
        assert!(host.is_settled());
        assert_eq!(host.displayed().page, PageId::Contact);
    }

    #[test]
    fn test_latest_request_wins_during_enter() {
        let mut host = get_settled_host(PageId::Home);

        let exit = host.request(PageId::About).unwrap();
        let about_enter = host.complete(exit.ticket).unwrap();
        let contact_enter = host.request(PageId::Contact).unwrap();

        assert_ne!(about_enter.ticket, contact_enter.ticket);
        assert_eq!(host.complete(about_enter.ticket), None);
        assert_eq!(host.displayed().page, PageId::Contact);

        settle(&mut host, Some(contact_enter));
        assert!(host.is_settled());
        assert_eq!(host.displayed().page, PageId::Contact);
    }

    #[test]
    fn test_back_to_displayed_page_mid_exit_reenters_it() {
        let mut host = get_settled_host(PageId::Home);
        host.request(PageId::About).unwrap();

        let enter = host.request(PageId::Home).unwrap();
        assert_eq!((enter.page, enter.phase), (PageId::Home, Phase::Entering));

        settle(&mut host, Some(enter));
        assert_eq!(host.displayed().page, PageId::Home);
    }

    #[test]
    fn test_stale_ticket_after_settle_is_ignored() {
        let mut host = get_settled_host(PageId::Home);
        let exit = host.request(PageId::Wellness).unwrap();
        settle(&mut host, Some(exit));

        assert_eq!(host.complete(exit.ticket), None);
        assert!(host.is_settled());
        assert_eq!(host.displayed().page, PageId::Wellness);
    }

    #[test]
    fn test_custom_timings_drive_durations() {
        let timings = TransitionTimings {
            enter: Duration::from_millis(400),
            exit: Duration::from_millis(100),
        };
        let mut host = TransitionHost::new(PageId::Home, timings);
        let initial = host.in_flight();
        settle(&mut host, initial);

        let exit = host.request(PageId::About).unwrap();
        let enter = host.complete(exit.ticket).unwrap();

        assert_eq!(exit.duration + enter.duration, timings.total());
        assert_eq!(host.timings(), timings);
    }

    #[test]
    fn test_router_and_host_agree_after_rapid_navigation() {
        let mut router = get_router_scrolled(0.0);
        let mut host = get_settled_host(router.current());
        let mut last = None;

        for page in [PageId::About, PageId::Contact] {
            if router.navigate(page).is_changed() {
                last = host.request(router.current()).or(last);
            }
        }
        settle(&mut host, last);

        assert_eq!(router.current(), PageId::Contact);
        assert_eq!(host.displayed().page, PageId::Contact);
        assert!(host.is_settled());
    }
}
