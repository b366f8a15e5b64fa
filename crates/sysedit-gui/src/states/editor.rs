use sysedit_core::config::InteractionConfig;
use sysedit_core::input::WheelAccumulator;
use sysedit_core::selection::Selection;
use sysedit_core::viewport::ViewportController;
use sysedit_core::world::StarSystem;

/// One open editor window. Viewport and selection live and die with it.
pub struct EditorView {
    pub id: u64,
    pub system: StarSystem,
    pub controller: ViewportController,
    pub selection: Selection,
    /// Scroll not yet worth a full zoom step.
    pub wheel: WheelAccumulator,
    /// Cleared by the Close button or the window's close control.
    pub open: bool,
}

impl EditorView {
    pub fn new(id: u64, system: StarSystem, interaction: InteractionConfig) -> Self {
        Self {
            id,
            system,
            controller: ViewportController::new(interaction),
            selection: Selection::new(),
            wheel: WheelAccumulator::new(),
            open: true,
        }
    }

    pub fn title(&self) -> String {
        format!("Star System Editor: {}", self.system.name)
    }
}
