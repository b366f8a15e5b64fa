mod editor;
mod ui;
mod universe;

pub use editor::EditorView;
pub use ui::UIState;
pub use universe::demo_universe;
