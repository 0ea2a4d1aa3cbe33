/// Background offset and content opacity for the home hero at a given scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    /// Vertical translation of the background, in percent of its height.
    pub offset_percent: f64,
    pub opacity: f64,
}

/// Progress runs from 0 (hero top at viewport top) to 1 (hero scrolled out).
pub fn hero_parallax(scroll_y: f64, hero_height: f64) -> HeroParallax {
    let progress = if hero_height > 0.0 {
        (scroll_y / hero_height).clamp(0.0, 1.0)
    } else {
        0.0
    };

    HeroParallax {
        offset_percent: progress * 50.0,
        opacity: 1.0 - progress,
    }
}
