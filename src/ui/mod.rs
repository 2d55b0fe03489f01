//! UI layer: application chrome and the three pages.

pub mod map;
pub mod pages;
pub mod panels;
