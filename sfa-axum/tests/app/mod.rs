// Not every test binary uses every helper
#![allow(dead_code)]

mod catalog;
pub use catalog::*;
