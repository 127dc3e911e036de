//! Reusable UI building blocks rendered by pages.

pub mod home_content;
pub mod signup_form;
