use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use sysedit_core::geometry::Size;
use sysedit_core::input::{Gesture, PointerEvent};
use sysedit_core::viewport::ViewportController;
use tracing::debug;

use super::load_config;
use crate::summary::print_replay;

#[derive(Args)]
pub struct ReplayArgs {
    /// Pointer-event trace (TOML)
    pub trace: PathBuf,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Recorded canvas input.
#[derive(Debug, Deserialize)]
pub struct Trace {
    #[serde(default = "default_canvas")]
    pub canvas: Size,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

fn default_canvas() -> Size {
    Size::new(800.0, 600.0)
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let content = std::fs::read_to_string(&args.trace)
        .with_context(|| format!("Failed to read trace {}", args.trace.display()))?;
    let trace: Trace = toml::from_str(&content)
        .with_context(|| format!("Failed to parse trace {}", args.trace.display()))?;

    debug!(events = trace.events.len(), "Replaying pointer trace");
    let mut controller = ViewportController::new(config.interaction);
    let gestures = replay(&mut controller, &trace);

    print_replay(&args.trace, &gestures, controller.state());
    Ok(())
}

/// Feed every event through the controller, keeping (event index, gesture).
pub fn replay(controller: &mut ViewportController, trace: &Trace) -> Vec<(usize, Gesture)> {
    trace
        .events
        .iter()
        .enumerate()
        .filter_map(|(i, event)| controller.handle(event, trace.canvas).map(|g| (i, g)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = r#"
[canvas]
width = 640
height = 480

[[events]]
kind = "down"
x = 320.0
y = 240.0
button = "primary"
time_ms = 0

[[events]]
kind = "move"
dx = 40.0
dy = -10.0

[[events]]
kind = "up"
time_ms = 120

[[events]]
kind = "down"
x = 10.0
y = 10.0
button = "wheel-up"
time_ms = 200

[[events]]
kind = "down"
x = 100.0
y = 100.0
button = "primary"
modifiers = { ctrl = true }
time_ms = 300

[[events]]
kind = "up"
time_ms = 350
"#;

    #[test]
    fn test_trace_parses() {
        let trace: Trace = toml::from_str(TRACE).unwrap();
        assert_eq!(trace.canvas, Size::new(640.0, 480.0));
        assert_eq!(trace.events.len(), 6);
    }

    #[test]
    fn test_replay_produces_gestures() {
        let trace: Trace = toml::from_str(TRACE).unwrap();
        let mut controller = ViewportController::default();
        let gestures = replay(&mut controller, &trace);

        assert_eq!(gestures.len(), 3);
        assert!(matches!(gestures[0], (2, Gesture::Pan { .. })));
        assert!(matches!(gestures[1], (3, Gesture::ZoomedIn)));
        assert!(matches!(
            gestures[2],
            (5, Gesture::Click { additive: true, .. })
        ));

        // Pan of (-40, -10) rescaled by the 1.0 -> 1.5 zoom step.
        let state = controller.state();
        assert_eq!(state.zoom, 1.5);
        assert_eq!(state.pan_x, -60.0);
        assert_eq!(state.pan_y, -15.0);
    }

    #[test]
    fn test_missing_canvas_uses_default() {
        let trace: Trace = toml::from_str("").unwrap();
        assert_eq!(trace.canvas, default_canvas());
        assert!(trace.events.is_empty());
    }

    #[test]
    fn test_demo_trace() {
        let source = include_str!("../../../../demos/pan_and_click.toml");
        let trace: Trace = toml::from_str(source).unwrap();
        let mut controller = ViewportController::default();
        let gestures = replay(&mut controller, &trace);

        let indices: Vec<usize> = gestures.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 5, 6, 7, 8, 10]);
        assert!(matches!(gestures[0].1, Gesture::Click { additive: false, quick: true, .. }));
        assert!(matches!(gestures[1].1, Gesture::Pan { moved, .. } if moved == 130.0));
        assert!(matches!(gestures[4].1, Gesture::ZoomedOut));
        assert!(matches!(gestures[5].1, Gesture::Click { additive: true, .. }));

        let state = controller.state();
        assert_eq!(state.zoom, 1.5);
        assert_eq!(state.pan_x, -150.0);
        assert_eq!(state.pan_y, 45.0);
    }
}
