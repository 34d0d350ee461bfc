//! Record trait implementation for [`Item`], plus parsing of the raw item form.
//!
//! Price and quantity arrive as text. A value that doesn't parse is a validation error,
//! reported together with any empty text fields.

use super::{ItemAction, ItemActionResult, ItemError};
use crate::framework::Record;
use crate::model::{Item, ItemDraft, ItemFields, ItemId};

impl ItemDraft {
    /// Validate the form and parse its numeric fields.
    ///
    /// `price` must be a finite number `>= 0` and `qty` a whole number `>= 0`. Both are
    /// trimmed and must parse in full ("12abc" is rejected).
    pub fn parse(self) -> Result<ItemFields, ItemError> {
        let mut invalid = Vec::new();

        if self.name.trim().is_empty() {
            invalid.push("name");
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0);
        if price.is_none() {
            invalid.push("price");
        }
        let qty = self.qty.trim().parse::<u32>().ok();
        if qty.is_none() {
            invalid.push("qty");
        }
        if self.description.trim().is_empty() {
            invalid.push("description");
        }

        match (price, qty) {
            (Some(price), Some(qty)) if invalid.is_empty() => Ok(ItemFields {
                name: self.name,
                price,
                qty,
                description: self.description,
            }),
            _ => Err(ItemError::Validation { fields: invalid }),
        }
    }
}

impl Record for Item {
    type Id = ItemId;
    type Create = ItemDraft;
    type Update = ItemDraft;
    type Action = ItemAction;
    type ActionResult = ItemActionResult;
    type Context = ();
    type Error = ItemError;

    fn id(&self) -> ItemId {
        self.id
    }

    fn from_create_params(id: ItemId, draft: ItemDraft, _ctx: &()) -> Result<Self, ItemError> {
        Ok(Item::new(id, draft.parse()?))
    }

    /// Replaces every field; the id is kept.
    fn on_update(&mut self, draft: ItemDraft) -> Result<(), ItemError> {
        let fields = draft.parse()?;
        *self = Item::new(self.id, fields);
        Ok(())
    }

    fn handle_action(&mut self, action: ItemAction) -> Result<ItemActionResult, ItemError> {
        match action {
            ItemAction::CheckStock => Ok(ItemActionResult::CheckStock(self.qty)),
            ItemAction::CheckAvailability(requested) if requested > self.qty => {
                Err(ItemError::InsufficientStock {
                    requested,
                    available: self.qty,
                })
            }
            ItemAction::CheckAvailability(_) => Ok(ItemActionResult::CheckAvailability(self.price)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reads_numeric_text() {
        let fields = ItemDraft::new("Pen", "1.50", "10", "blue").parse().unwrap();
        assert_eq!(fields.price, 1.5);
        assert_eq!(fields.qty, 10);
        assert_eq!(fields.name, "Pen");
    }

    #[test]
    fn test_parse_trims_numbers() {
        let fields = ItemDraft::new("Pen", " 2 ", " 0 ", "blue").parse().unwrap();
        assert_eq!(fields.price, 2.0);
        assert_eq!(fields.qty, 0);
    }

    #[test]
    fn test_parse_rejects_non_numeric_price() {
        let err = ItemDraft::new("Bad", "abc", "5", "x").parse().unwrap_err();
        assert_eq!(err, ItemError::Validation { fields: vec!["price"] });
    }

    #[test]
    fn test_parse_rejects_nan_negative_and_fractional_values() {
        for (price, qty, bad) in [
            ("NaN", "1", "price"),
            ("inf", "1", "price"),
            ("-1", "1", "price"),
            ("1", "-3", "qty"),
            ("1", "2.5", "qty"),
            ("1", "12abc", "qty"),
        ] {
            let err = ItemDraft::new("Pen", price, qty, "blue").parse().unwrap_err();
            assert_eq!(err, ItemError::Validation { fields: vec![bad] }, "{price}/{qty}");
        }
    }

    #[test]
    fn test_parse_reports_every_invalid_field() {
        let err = ItemDraft::new("", "", "", " ").parse().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Item validation error: invalid name, price, qty, description"
        );
    }

    #[test]
    fn test_check_availability_compares_against_stock() {
        let mut item =
            Item::from_create_params(ItemId(1), ItemDraft::new("Pen", "1.50", "10", "blue"), &())
                .unwrap();

        assert_eq!(
            item.handle_action(ItemAction::CheckAvailability(10)).unwrap(),
            ItemActionResult::CheckAvailability(1.5)
        );
        assert_eq!(
            item.handle_action(ItemAction::CheckAvailability(11)).unwrap_err(),
            ItemError::InsufficientStock {
                requested: 11,
                available: 10
            }
        );
        // availability checks never consume stock
        assert_eq!(
            item.handle_action(ItemAction::CheckStock).unwrap(),
            ItemActionResult::CheckStock(10)
        );
    }

    #[test]
    fn test_rejected_update_keeps_old_values() {
        let mut item =
            Item::from_create_params(ItemId(3), ItemDraft::new("Pen", "1.50", "10", "blue"), &())
                .unwrap();

        assert!(item.on_update(ItemDraft::new("Pen", "free", "10", "blue")).is_err());
        assert_eq!(item.price, 1.5);

        item.on_update(ItemDraft::new("Pencil", "0.75", "40", "grey")).unwrap();
        assert_eq!(item.id, ItemId(3));
        assert_eq!(item.name, "Pencil");
        assert_eq!(item.qty, 40);
    }
}
