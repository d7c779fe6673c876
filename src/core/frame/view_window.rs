use std::fmt;

use crate::core::frame::smoother::SmoothedState;

/// The axis-aligned parameter range across the unrotated view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewWindow {
    #[must_use]
    pub fn from_state(state: &SmoothedState) -> Self {
        let edge = |uv: f64, displace: f64| (uv - 0.5) * state.zoom + 0.5 + displace;

        Self {
            x_min: edge(0.0, state.displace_x),
            x_max: edge(1.0, state.displace_x),
            y_min: edge(0.0, state.displace_y),
            y_max: edge(1.0, state.displace_y),
        }
    }

    /// One-line caption for overlays and logs.
    #[must_use]
    pub fn info_text(&self, pattern: &str) -> String {
        format!("Pattern: {} | {}", pattern, self)
    }
}

impl fmt::Display for ViewWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: [{:.2}, {:.2}] | Y: [{:.2}, {:.2}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;

    #[test]
    fn default_view_window() {
        let state = SmoothedState::target_of(&LyapunovConfig::default());
        let window = ViewWindow::from_state(&state);

        assert!((window.x_min - 1.85).abs() < 1e-12);
        assert!((window.x_max - 3.89).abs() < 1e-12);
        assert!((window.y_min - 2.77).abs() < 1e-12);
        assert!((window.y_max - 4.81).abs() < 1e-12);
    }

    #[test]
    fn info_text_format() {
        let state = SmoothedState::target_of(&LyapunovConfig::default());
        let window = ViewWindow::from_state(&state);

        assert_eq!(
            window.info_text("AAABB"),
            "Pattern: AAABB | X: [1.85, 3.89] | Y: [2.77, 4.81]"
        );
    }
}
