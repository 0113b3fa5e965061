//! The two halves of the page: what the user picks, and what is shown for it.

pub mod input;
pub mod presentation;
