use std::path::Path;

use console::Style;
use sysedit_core::input::Gesture;
use sysedit_core::shiplog::ShipLog;
use sysedit_core::viewport::ViewportState;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_ship_logs(store: &ShipLog) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Ship Log"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();

    if store.logs().is_empty() {
        println!("  {}", s.disabled.apply_to("no logs created"));
        println!();
        return;
    }

    for log in store.logs() {
        let id = log.id.as_deref().unwrap_or("(unnamed)");
        println!(
            "  {} {}",
            s.header.apply_to(&log.name),
            s.label.apply_to(format!("[{}] {}", log.kind, id))
        );
        if log.max_len > 0 {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Max entries"),
                s.value.apply_to(log.max_len)
            );
        }
        if log.is_empty() {
            println!("    {}", s.disabled.apply_to("empty"));
        }
        for entry in log.entries() {
            println!(
                "    {:<12}{}",
                s.label.apply_to(format!("#{}", entry.seq)),
                entry.message
            );
        }
        println!();
    }
}

pub fn print_replay(trace: &Path, gestures: &[(usize, Gesture)], state: &ViewportState) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Viewport Replay"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Trace"),
        s.path.apply_to(trace.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Gestures"));
    if gestures.is_empty() {
        println!("    {}", s.disabled.apply_to("none"));
    }
    for (index, gesture) in gestures {
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("event {index}")),
            s.value.apply_to(gesture)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Final Viewport"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pan"),
        s.value
            .apply_to(format!("({:.1}, {:.1})", state.pan_x, state.pan_y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.0}%", state.zoom * 100.0))
    );
    if state.drag_active {
        println!("    {}", s.disabled.apply_to("drag still in progress"));
    }
    println!();
}
