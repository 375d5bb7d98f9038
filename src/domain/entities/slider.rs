#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideTarget {
    Login,
    Register,
}

impl SlideTarget {
    /// `register` selects the register panel; anything else means login.
    pub fn parse(target: &str) -> Self {
        if target == "register" {
            SlideTarget::Register
        } else {
            SlideTarget::Login
        }
    }
}

/// Horizontal offset of the slider container in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideOffset(pub i64);

impl SlideOffset {
    pub fn transform(self) -> String {
        if self.0 == 0 {
            "translateX(0)".to_string()
        } else {
            format!("translateX({}px)", self.0)
        }
    }
}

pub fn slide_offset(target: SlideTarget, panel_width: f64) -> SlideOffset {
    match target {
        SlideTarget::Register => SlideOffset(-(panel_width.max(0.0).round() as i64)),
        SlideTarget::Login => SlideOffset(0),
    }
}
