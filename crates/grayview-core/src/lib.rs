pub mod controller;
pub mod error;
pub mod grid;
pub mod io;
pub mod normalize;
pub mod palette;
pub mod view;
pub mod viewport;
