// select/mod.rs - Selection menus: pure state, viewport math, terminal rendering

pub mod item;
pub mod menu;
mod render;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod viewport;
