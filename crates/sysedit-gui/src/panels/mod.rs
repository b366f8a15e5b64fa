pub mod canvas;
pub mod editor;
pub mod menu_bar;
pub mod shiplog;
pub mod status;
pub mod systems;
