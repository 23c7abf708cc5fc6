/// State of the XR entry button.
///
/// Mirrors what an "enter AR" button shows: nothing to start when XR is
/// off or no runtime exists, otherwise a start/stop toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArButton {
    Unsupported,
    Available,
    Active,
}

impl ArButton {
    pub fn new(xr_enabled: bool, runtime_available: bool) -> Self {
        if xr_enabled && runtime_available {
            Self::Available
        } else {
            Self::Unsupported
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unsupported => "AR NOT SUPPORTED",
            Self::Available => "START AR",
            Self::Active => "STOP AR",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Start or stop the session. A no-op when unsupported.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Unsupported => Self::Unsupported,
            Self::Available => Self::Active,
            Self::Active => Self::Available,
        };
    }
}

/// On-screen panel contents: heading, click counter, AR button.
#[derive(Debug, Clone)]
pub struct Overlay {
    heading: String,
    count: u32,
    visible: bool,
    ar: ArButton,
}

impl Overlay {
    pub fn new(heading: impl Into<String>, ar: ArButton) -> Self {
        Self {
            heading: heading.into(),
            count: 0,
            visible: true,
            ar,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn counter_label(&self) -> String {
        format!("count is {}", self.count)
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn ar(&self) -> ArButton {
        self.ar
    }

    pub fn ar_mut(&mut self) -> &mut ArButton {
        &mut self.ar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ar_unsupported_without_runtime() {
        assert_eq!(ArButton::new(true, false), ArButton::Unsupported);
        assert_eq!(ArButton::new(false, true), ArButton::Unsupported);
        assert_eq!(ArButton::new(true, true), ArButton::Available);
    }

    #[test]
    fn ar_labels() {
        assert_eq!(ArButton::Unsupported.label(), "AR NOT SUPPORTED");
        assert_eq!(ArButton::Available.label(), "START AR");
        assert_eq!(ArButton::Active.label(), "STOP AR");
    }

    #[test]
    fn ar_toggle_cycles_when_supported() {
        let mut b = ArButton::Available;
        b.toggle();
        assert_eq!(b, ArButton::Active);
        b.toggle();
        assert_eq!(b, ArButton::Available);
    }

    #[test]
    fn ar_toggle_is_noop_when_unsupported() {
        let mut b = ArButton::Unsupported;
        b.toggle();
        assert_eq!(b, ArButton::Unsupported);
        assert!(!b.is_enabled());
    }

    #[test]
    fn counter_counts_clicks() {
        let mut o = Overlay::new("bouncebox", ArButton::Unsupported);
        assert_eq!(o.counter_label(), "count is 0");
        o.increment();
        o.increment();
        assert_eq!(o.count(), 2);
        assert_eq!(o.counter_label(), "count is 2");
    }

    #[test]
    fn visibility_toggles() {
        let mut o = Overlay::new("bouncebox", ArButton::Unsupported);
        assert!(o.is_visible());
        o.toggle_visible();
        assert!(!o.is_visible());
    }
}
