use chrono::Utc;
use clap::Subcommand;
use serde::Serialize;

use tickdown_core::storage::{load_state, save_state};
use tickdown_core::widget::WIDGET_DIAMETER;
use tickdown_core::{
    Config, DraggableWidgetController, Event, ReleaseOutcome, ScreenBounds, WidgetPosition,
};

const WIDGET_STATE: &str = "widget.json";

#[derive(Subcommand)]
pub enum WidgetAction {
    /// Tap the widget (fires the activation signal)
    Tap,
    /// Drag the widget by an offset and release
    Drag {
        #[arg(long)]
        dx: f32,
        #[arg(long)]
        dy: f32,
    },
    /// Print the widget position and badge as JSON
    Status,
    /// Return the widget to its initial resting spot
    Reset,
}

#[derive(Serialize)]
struct WidgetStatus {
    position: WidgetPosition,
    badge: Option<String>,
}

fn screen_bounds() -> ScreenBounds {
    let cfg = Config::load_or_default();
    ScreenBounds {
        width: cfg.widget.screen_width,
        height: cfg.widget.screen_height,
    }
}

fn load_controller(screen: ScreenBounds) -> DraggableWidgetController {
    match load_state::<WidgetPosition>(WIDGET_STATE) {
        Some(position) => DraggableWidgetController::with_position(screen, position),
        None => DraggableWidgetController::new(screen),
    }
}

fn print_release(outcome: &ReleaseOutcome) -> Result<(), Box<dyn std::error::Error>> {
    if outcome.activated() {
        let event = Event::WidgetActivated { at: Utc::now() };
        println!("{}", serde_json::to_string_pretty(&event)?);
    }
    let event = Event::WidgetSnapped {
        x: outcome.position.x,
        y: outcome.position.y,
        at: Utc::now(),
    };
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

pub fn run(action: WidgetAction) -> Result<(), Box<dyn std::error::Error>> {
    let screen = screen_bounds();
    let mut widget = load_controller(screen);

    match action {
        WidgetAction::Tap => {
            let center = WIDGET_DIAMETER / 2.0;
            let at = widget.position();
            widget.grant();
            if let Some(outcome) = widget.release(at.x + center, at.y + center) {
                print_release(&outcome)?;
            }
            save_state(WIDGET_STATE, &widget.position())?;
        }
        WidgetAction::Drag { dx, dy } => {
            let center = WIDGET_DIAMETER / 2.0;
            let at = widget.position();
            widget.grant();
            widget.drag_move(dx, dy);
            if let Some(outcome) = widget.release(at.x + center + dx, at.y + center + dy) {
                print_release(&outcome)?;
            }
            save_state(WIDGET_STATE, &widget.position())?;
        }
        WidgetAction::Status => {
            let display = super::timer::load_display();
            let status = WidgetStatus {
                position: widget.position(),
                badge: widget.badge_label(&display),
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        WidgetAction::Reset => {
            let widget = DraggableWidgetController::new(screen);
            save_state(WIDGET_STATE, &widget.position())?;
            println!("{}", serde_json::to_string_pretty(&widget.position())?);
        }
    }
    Ok(())
}
