pub mod back_to_top;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod preloader;
pub mod sections;
pub mod stats;
pub mod testimonials;
