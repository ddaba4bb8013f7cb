//! Migration window classification.

use crate::types::{Window, WindowState};
use crate::MigrationError;

impl Window {
    pub fn new(start_at: u64, end_at: u64) -> Result<Self, MigrationError> {
        if start_at >= end_at {
            return Err(MigrationError::InvalidWindow);
        }
        Ok(Window { start_at, end_at })
    }

    /// Classifies `now`. The end bound is exclusive.
    pub fn state_at(&self, now: u64) -> WindowState {
        if now < self.start_at {
            WindowState::Pending
        } else if now < self.end_at {
            WindowState::Open
        } else {
            WindowState::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let window = Window::new(100, 200).unwrap();

        assert_eq!(window.state_at(0), WindowState::Pending);
        assert_eq!(window.state_at(99), WindowState::Pending);
        assert_eq!(window.state_at(100), WindowState::Open);
        assert_eq!(window.state_at(199), WindowState::Open);
        assert_eq!(window.state_at(200), WindowState::Closed);
        assert_eq!(window.state_at(u64::MAX), WindowState::Closed);
    }

    #[test]
    fn test_empty_or_inverted_window_rejected() {
        assert_eq!(Window::new(200, 200), Err(MigrationError::InvalidWindow));
        assert_eq!(Window::new(300, 200), Err(MigrationError::InvalidWindow));
    }
}
