//! Scroll- and toggle-reactive state of the page header

/// How the header should look for the current scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderAppearance {
    /// Translated out of view
    pub hidden: bool,
    pub shadow: bool,
}

impl HeaderAppearance {
    pub fn style(&self) -> String {
        let transform = if self.hidden { "translateY(-100%)" } else { "translateY(0)" };
        let shadow = if self.shadow { "0 4px 20px rgba(0, 0, 0, 0.15)" } else { "none" };
        format!("transform: {transform}; box-shadow: {shadow};")
    }
}

/// Tracks the last scroll offset to tell scrolling down from scrolling up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderScrollState {
    last_offset: f64,
    hide_threshold: f64,
    shadow_threshold: f64,
}

impl HeaderScrollState {
    pub fn new(hide_threshold: f64, shadow_threshold: f64) -> Self {
        Self {
            last_offset: 0.0,
            hide_threshold,
            shadow_threshold,
        }
    }

    pub fn on_scroll(&mut self, offset: f64) -> HeaderAppearance {
        let scrolling_down = offset > self.last_offset;
        let appearance = HeaderAppearance {
            hidden: scrolling_down && offset > self.hide_threshold,
            shadow: offset > self.shadow_threshold,
        };
        self.last_offset = offset;
        appearance
    }
}

/// Hamburger menu of narrow layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileNavState {
    open: bool,
}

impl MobileNavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns true if the menu was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> HeaderScrollState {
        HeaderScrollState::new(200.0, 50.0)
    }

    #[test]
    fn test_hides_only_past_threshold_when_scrolling_down() {
        let mut s = state();
        assert!(!s.on_scroll(150.0).hidden);
        assert!(s.on_scroll(250.0).hidden);
        assert!(s.on_scroll(400.0).hidden);
    }

    #[test]
    fn test_scrolling_up_reveals() {
        let mut s = state();
        s.on_scroll(500.0);
        let a = s.on_scroll(450.0);
        assert!(!a.hidden);
        assert!(a.shadow);
    }

    #[test]
    fn test_shadow_independent_of_direction() {
        let mut s = state();
        assert!(!s.on_scroll(50.0).shadow);
        assert!(s.on_scroll(51.0).shadow);
        assert!(!s.on_scroll(10.0).shadow);
    }

    #[test]
    fn test_same_offset_is_not_scrolling_down() {
        let mut s = state();
        s.on_scroll(300.0);
        assert!(!s.on_scroll(300.0).hidden);
    }

    #[test]
    fn test_mobile_nav_toggle_and_close() {
        let mut nav = MobileNavState::default();
        nav.toggle();
        assert!(nav.is_open());
        assert!(nav.close());
        assert!(!nav.is_open());
        assert!(!nav.close());
    }

    #[test]
    fn test_appearance_style() {
        let a = HeaderAppearance { hidden: true, shadow: false };
        assert_eq!(a.style(), "transform: translateY(-100%); box-shadow: none;");
    }
}
