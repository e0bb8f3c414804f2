//! Page navigation

/// Moves the browser to another page
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Navigate to `target`, relative to the current page
    fn navigate(&self, target: &str);
}
