/// Detection and barcode records
pub mod barcode;

pub use barcode::{Barcode, Detection};
