//! Exit/enter sequencing for page swaps.
//!
//! One page slot is mounted at a time. A settled page exits before the next
//! one enters; a request that arrives mid-animation drops the animating slot
//! and starts the newest target entering straight away.

use std::time::Duration;

use crate::models::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Active,
    Exiting,
    Gone,
}

impl Phase {
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }

    /// Class hook for the stylesheet's enter/exit keyframes.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Entering => "page-entering",
            Self::Active => "page-active",
            Self::Exiting => "page-exiting",
            Self::Gone => "page-gone",
        }
    }
}

/// Identifies one scheduled animation. Completions carrying an older ticket
/// belong to an abandoned animation and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    pub enter: Duration,
    pub exit: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(250),
            exit: Duration::from_millis(150),
        }
    }
}

impl TransitionTimings {
    pub fn total(&self) -> Duration {
        self.enter + self.exit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub page: PageId,
    pub phase: Phase,
    ticket: Ticket,
}

/// A timer the view must start; when it fires, feed the ticket back to
/// [`TransitionHost::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub ticket: Ticket,
    pub page: PageId,
    pub phase: Phase,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct TransitionHost {
    displayed: Slot,
    pending: Option<PageId>,
    timings: TransitionTimings,
    next_ticket: u64,
}

impl TransitionHost {
    /// The initial page mounts in `Entering` so it plays its entrance too.
    pub fn new(initial: PageId, timings: TransitionTimings) -> Self {
        Self {
            displayed: Slot {
                page: initial,
                phase: Phase::Entering,
                ticket: Ticket(0),
            },
            pending: None,
            timings,
            next_ticket: 1,
        }
    }

    pub fn timings(&self) -> TransitionTimings {
        self.timings
    }

    pub fn displayed(&self) -> Slot {
        self.displayed
    }

    pub fn pending(&self) -> Option<PageId> {
        self.pending
    }

    /// The page the host is heading towards once everything settles.
    pub fn target(&self) -> PageId {
        self.pending.unwrap_or(self.displayed.page)
    }

    pub fn is_settled(&self) -> bool {
        self.pending.is_none() && self.displayed.phase == Phase::Active
    }

    /// The animation currently owed by the displayed slot, if any.
    pub fn in_flight(&self) -> Option<Animation> {
        self.displayed
            .phase
            .is_animating()
            .then(|| self.animation_for(self.displayed))
    }

    pub fn request(&mut self, target: PageId) -> Option<Animation> {
        if target == self.target() {
            return None;
        }

        match self.displayed.phase {
            Phase::Active => {
                self.displayed = self.slot(self.displayed.page, Phase::Exiting);
                self.pending = Some(target);
            }
            Phase::Entering | Phase::Exiting | Phase::Gone => {
                log::debug!(
                    "transition for {} superseded by {}",
                    self.displayed.page,
                    target
                );
                self.pending = None;
                self.displayed = self.slot(target, Phase::Entering);
            }
        }

        Some(self.animation_for(self.displayed))
    }

    pub fn complete(&mut self, ticket: Ticket) -> Option<Animation> {
        if ticket != self.displayed.ticket {
            log::trace!("ignoring stale transition ticket {:?}", ticket);
            return None;
        }

        match self.displayed.phase {
            Phase::Entering => {
                self.displayed.phase = Phase::Active;
                None
            }
            Phase::Exiting => {
                self.displayed.phase = Phase::Gone;
                let next = self.pending.take()?;
                self.displayed = self.slot(next, Phase::Entering);
                Some(self.animation_for(self.displayed))
            }
            Phase::Active | Phase::Gone => None,
        }
    }

    fn slot(&mut self, page: PageId, phase: Phase) -> Slot {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        Slot {
            page,
            phase,
            ticket,
        }
    }

    fn animation_for(&self, slot: Slot) -> Animation {
        let duration = match slot.phase {
            Phase::Entering => self.timings.enter,
            Phase::Exiting => self.timings.exit,
            Phase::Active | Phase::Gone => Duration::ZERO,
        };

        Animation {
            ticket: slot.ticket,
            page: slot.page,
            phase: slot.phase,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_unique_per_slot() {
        let mut host = TransitionHost::new(PageId::Home, TransitionTimings::default());
        let a = host.slot(PageId::About, Phase::Entering);
        let b = host.slot(PageId::About, Phase::Entering);
        assert_ne!(a.ticket, b.ticket);
        assert!(b.ticket > a.ticket);
    }

    #[test]
    fn test_gone_and_active_owe_no_animation() {
        let host = TransitionHost::new(PageId::Home, TransitionTimings::default());
        let gone = Slot {
            page: PageId::Home,
            phase: Phase::Gone,
            ticket: Ticket(9),
        };
        assert_eq!(host.animation_for(gone).duration, Duration::ZERO);
    }
}
