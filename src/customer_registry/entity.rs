//! Record trait implementation for [`Customer`].
//!
//! All five form fields are required, on create and on update alike. An update replaces
//! the whole record; there is no partial merge.

use super::CustomerError;
use crate::framework::Record;
use crate::model::{Customer, CustomerFields, CustomerId};

fn validate(fields: &CustomerFields) -> Result<(), CustomerError> {
    let missing = fields.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CustomerError::Validation { missing })
    }
}

impl Record for Customer {
    type Id = CustomerId;
    type Create = CustomerFields;
    type Update = CustomerFields;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn from_create_params(
        id: CustomerId,
        fields: CustomerFields,
        _ctx: &(),
    ) -> Result<Self, CustomerError> {
        validate(&fields)?;
        Ok(Customer::new(id, fields))
    }

    fn on_update(&mut self, fields: CustomerFields) -> Result<(), CustomerError> {
        validate(&fields)?;
        *self = Customer::new(self.id, fields);
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), CustomerError> {
        Ok(())
    }
}
