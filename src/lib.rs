pub mod components;
pub mod gallery;
