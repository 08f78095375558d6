pub mod tender;

pub use crate::domain::model::{Denomination, Tender, TenderLine, DENOMINATIONS};
pub use crate::utils::error::Result;
