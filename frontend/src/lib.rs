pub mod components;
pub mod config;
pub mod core;
pub mod dom;
pub mod error;
pub mod runtime;

pub mod pages {
    pub mod landing;
}

pub mod utils {
    pub mod api;
}
