pub mod menu;
pub mod sample_data;

pub use menu::{Console, MenuCommand};
