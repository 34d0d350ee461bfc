//! Custom actions for the Item collection.
//!
//! Stock checks run inside the item actor, so the answer reflects the stock level at the
//! moment the request is processed.

/// Custom actions for Item records.
#[derive(Debug, Clone)]
pub enum ItemAction {
    /// Read the current stock level.
    CheckStock,
    /// Confirm that `u32` units can be put in a cart.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if the quantity exceeds the recorded stock.
    /// Stock is not reserved or decremented.
    CheckAvailability(u32),
}

/// Results from ItemActions - variants match 1:1 with ItemAction
#[derive(Debug, Clone, PartialEq)]
pub enum ItemActionResult {
    /// Current stock level
    CheckStock(u32),
    /// Current unit price of the available item
    CheckAvailability(f64),
}
