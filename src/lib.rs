#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub mod array_utils;
pub mod centroid;
pub mod date_utils;
pub mod encoding;
pub mod json_utils;
pub mod keygen;
pub mod string_utils;
