//! Supporting utilities used by models.

pub mod dictionary;
pub mod field;
pub mod triple;
