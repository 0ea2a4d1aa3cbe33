/// Share of a reveal that must be on screen before it plays.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the bottom edge of the viewport up so reveals start just after
/// they scroll in.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Direction a reveal enters from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    Zoom,
}

impl RevealFrom {
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Below => "reveal-up",
            Self::Left => "reveal-left",
            Self::Right => "reveal-right",
            Self::Zoom => "reveal-zoom",
        }
    }
}

/// Whether a reveal has entered the viewport. Once set it never clears, so
/// scrolling back past a section does not replay it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns true only for the report that
    /// makes the reveal visible; later reports are ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    /// Shows the content without waiting for the viewport.
    pub fn force(&mut self) {
        self.visible = true;
    }
}

/// Class list for a reveal wrapper. The animation only runs once `visible`
/// is present.
pub fn reveal_classes(from: RevealFrom, extra: &str, latch: RevealLatch) -> String {
    let mut classes = from.class_name().to_string();
    if !extra.is_empty() {
        classes.push(' ');
        classes.push_str(extra);
    }
    if latch.is_visible() {
        classes.push_str(" visible");
    }
    classes
}
