//! # Order Composer
//!
//! A cart session that collects lines for one customer and turns them into a stored
//! [`Order`](crate::model::Order).
//!
//! ```text
//! Empty --select_customer--> CustomerChosen --add_line--> HasLines --place_order--> CustomerChosen
//! ```
//!
//! `clear` and `place_order` keep the chosen customer, so the next cart for the same
//! customer needs no re-selection. `remove_line` of the last line drops back to
//! `CustomerChosen` (or `Empty` when no customer was chosen).
//!
//! Sessions are independent: [`PosSystem::composer`](crate::lifecycle::PosSystem::composer)
//! can hand out as many as needed, all sharing the same collections.

pub mod cart;
pub mod error;
pub mod session;

pub use cart::{CartSnapshot, CustomerContact, SelectedItem, SessionState};
pub use error::ComposerError;
pub use session::OrderComposer;
