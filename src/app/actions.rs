//! Actions handed back from a style card to the list controller.
//!
//! Card presenters never hold a reference to their controller. Instead, each
//! card operation returns a `Vec<Action>` describing the side effects it wants;
//! the controller executes them in order against the host.
//!
//! # Example
//!
//! ```rust
//! use style_catalog::app::Action;
//!
//! let actions = vec![
//!     Action::Notify("Style copied".to_string()),
//!     Action::Refresh,
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::StyleId;
use crate::host::View;

/// Side effects requested by a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Re-run the controller's refresh pipeline.
    ///
    /// Emitted after a card created a new record.
    Refresh,

    /// Show a non-blocking message to the user.
    Notify(String),

    /// Navigate the host to another view.
    Navigate(View),

    /// Open the code display for a style.
    ShowCode(StyleId),
}
