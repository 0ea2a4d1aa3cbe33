/// Elements that switch the custom cursor into its hover variant.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, select, textarea, [role='button']";

const DOT_OFFSET: f64 = 4.0;
const FOLLOWER_OFFSET: f64 = 16.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl CursorTransform {
    pub fn to_css(&self) -> String {
        format!(
            "transform: translate3d({}px, {}px, 0) scale({});",
            self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub variant: CursorVariant,
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.variant = if hovering {
            CursorVariant::Hover
        } else {
            CursorVariant::Default
        };
    }

    pub fn dot(&self) -> CursorTransform {
        let scale = match self.variant {
            CursorVariant::Default => 1.0,
            CursorVariant::Hover => 2.0,
        };

        CursorTransform {
            x: self.x - DOT_OFFSET,
            y: self.y - DOT_OFFSET,
            scale,
        }
    }

    pub fn follower(&self) -> CursorTransform {
        let scale = match self.variant {
            CursorVariant::Default => 1.0,
            CursorVariant::Hover => 1.5,
        };

        CursorTransform {
            x: self.x - FOLLOWER_OFFSET,
            y: self.y - FOLLOWER_OFFSET,
            scale,
        }
    }
}
