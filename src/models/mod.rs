pub mod booking;
pub mod common;
pub mod contact;
pub mod experience;
pub mod filter;
pub mod property;
pub mod testimonial;
