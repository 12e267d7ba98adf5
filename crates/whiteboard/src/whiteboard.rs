//! Whiteboard: freehand drawing surface.
//!
//! One drawing surface with a row of color swatches, Undo and Clear below it.

use anyhow::{Context as _, Result};
use canvas::{Canvas, CanvasElement, CanvasEvent};
use clap::{Parser, ValueEnum};
use gpui::{
    actions, div, prelude::*, px, size, App, Application, Bounds, Entity, FocusHandle, Focusable,
    IntoElement, KeyBinding, Menu, MenuItem, ParentElement, Styled, Subscription, TitlebarOptions,
    Window, WindowBounds, WindowOptions,
};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use stroke::{Color, Settings};
use theme::Theme;
use ui::{v_stack, ControlRow};

mod logger;

use logger::WhiteboardLogger;

actions!(
    whiteboard,
    [
        Cancel,
        Clear,
        Quit,
        SelectBlack,
        SelectBlue,
        SelectGreen,
        SelectRed,
        SelectYellow,
        Undo,
    ]
);

/// Whiteboard - draw freehand strokes
#[derive(Parser, Debug)]
#[command(name = "whiteboard")]
#[command(about = "Freehand drawing surface with undo and clear")]
struct Args {
    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,

    /// JSON file overriding stroke width and control sizing
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    fn theme(self) -> Theme {
        match self {
            ThemeChoice::Light => Theme::light(),
            ThemeChoice::Dark => Theme::dark(),
        }
    }
}

/// Read settings from `path`, or use the defaults when no file was given.
fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    Settings::from_json(&json).with_context(|| format!("Invalid settings in {}", path.display()))
}

/// Main application component
struct Whiteboard {
    canvas: Entity<Canvas>,
    controls: Entity<ControlRow>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Whiteboard {
    pub fn new(
        theme: Theme,
        settings: Settings,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        let canvas = cx.new(|cx| Canvas::new(theme, settings, cx));
        let controls = cx.new(|_| ControlRow::new(canvas.clone()));

        let canvas_subscription = cx.subscribe(&canvas, Self::handle_canvas_event);

        // Losing the window mid-gesture ends the gesture
        let activation_subscription = cx.observe_window_activation(window, |this, window, cx| {
            if !window.is_window_active() {
                this.canvas.update(cx, |canvas, cx| {
                    if canvas.is_capturing() {
                        canvas.cancel_gesture(cx);
                    }
                });
            }
        });

        Whiteboard {
            canvas,
            controls,
            focus_handle,
            _subscriptions: vec![canvas_subscription, activation_subscription],
        }
    }

    fn handle_canvas_event(
        &mut self,
        _canvas: Entity<Canvas>,
        event: &CanvasEvent,
        _cx: &mut Context<Self>,
    ) {
        match event {
            CanvasEvent::StrokeCommitted(count) => {
                log::debug!("{} strokes on the board", count);
            }
            CanvasEvent::ColorChanged(color) => {
                log::info!("Active color: {}", color);
            }
        }
    }

    fn select_color(&mut self, color: Color, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.select_color(color, cx));
    }

    fn select_black(&mut self, _: &SelectBlack, _window: &mut Window, cx: &mut Context<Self>) {
        self.select_color(Color::Black, cx);
    }

    fn select_red(&mut self, _: &SelectRed, _window: &mut Window, cx: &mut Context<Self>) {
        self.select_color(Color::Red, cx);
    }

    fn select_blue(&mut self, _: &SelectBlue, _window: &mut Window, cx: &mut Context<Self>) {
        self.select_color(Color::Blue, cx);
    }

    fn select_green(&mut self, _: &SelectGreen, _window: &mut Window, cx: &mut Context<Self>) {
        self.select_color(Color::Green, cx);
    }

    fn select_yellow(&mut self, _: &SelectYellow, _window: &mut Window, cx: &mut Context<Self>) {
        self.select_color(Color::Yellow, cx);
    }

    fn undo(&mut self, _: &Undo, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.undo(cx));
    }

    fn clear(&mut self, _: &Clear, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.clear(cx));
    }

    fn handle_cancel(&mut self, _: &Cancel, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| {
            if canvas.is_capturing() {
                canvas.cancel_gesture(cx);
            }
        });
    }
}

impl Render for Whiteboard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (background, text) = {
            let theme = &self.canvas.read(cx).theme;
            (theme.canvas_background, theme.ui_text)
        };

        v_stack()
            .id("Whiteboard")
            .key_context("whiteboard")
            .track_focus(&self.focus_handle)
            .size_full()
            .justify_between()
            .bg(background)
            .text_color(text)
            .on_action(cx.listener(Self::select_black))
            .on_action(cx.listener(Self::select_red))
            .on_action(cx.listener(Self::select_blue))
            .on_action(cx.listener(Self::select_green))
            .on_action(cx.listener(Self::select_yellow))
            .on_action(cx.listener(Self::undo))
            .on_action(cx.listener(Self::clear))
            .on_action(cx.listener(Self::handle_cancel))
            // Drawing surface takes all space above the controls
            .child(
                div()
                    .flex_1()
                    .w_full()
                    .child(CanvasElement::new(self.canvas.clone())),
            )
            .child(self.controls.clone())
    }
}

impl Focusable for Whiteboard {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

fn init_keymap(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("1", SelectBlack, None),
        KeyBinding::new("2", SelectRed, None),
        KeyBinding::new("3", SelectBlue, None),
        KeyBinding::new("4", SelectGreen, None),
        KeyBinding::new("5", SelectYellow, None),
        KeyBinding::new("cmd-z", Undo, None),
        KeyBinding::new("ctrl-z", Undo, None),
        KeyBinding::new("cmd-backspace", Clear, None),
        KeyBinding::new("ctrl-backspace", Clear, None),
        KeyBinding::new("escape", Cancel, None),
        KeyBinding::new("cmd-q", Quit, None),
    ]);
}

fn main() -> Result<()> {
    let args = Args::parse();

    WhiteboardLogger::init(args.log_level)?;
    let settings = load_settings(args.settings.as_deref())?;
    let theme = args.theme.theme();
    log::info!("Starting whiteboard ({:?} theme)", args.theme);

    Application::new().run(move |cx: &mut App| {
        cx.on_action(quit);

        cx.set_menus(vec![
            Menu {
                name: "Whiteboard".into(),
                items: vec![MenuItem::action("Quit", Quit)],
            },
            Menu {
                name: "Edit".into(),
                items: vec![
                    MenuItem::action("Undo", Undo),
                    MenuItem::action("Clear", Clear),
                ],
            },
            Menu {
                name: "Color".into(),
                items: vec![
                    MenuItem::action("Black (1)", SelectBlack),
                    MenuItem::action("Red (2)", SelectRed),
                    MenuItem::action("Blue (3)", SelectBlue),
                    MenuItem::action("Green (4)", SelectGreen),
                    MenuItem::action("Yellow (5)", SelectYellow),
                ],
            },
        ]);

        init_keymap(cx);

        let bounds = Bounds::centered(None, size(px(800.0), px(600.0)), cx);
        let window = cx.open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Whiteboard".into()),
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| Whiteboard::new(theme, settings, window, cx)),
        );

        let window = match window {
            Ok(window) => window,
            Err(err) => {
                log::error!("Failed to open window: {:#}", err);
                cx.quit();
                return;
            }
        };

        if let Err(err) = window.update(cx, |view, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
        }) {
            log::error!("Failed to focus window: {:#}", err);
        }
    });

    Ok(())
}

fn quit(_: &Quit, cx: &mut App) {
    cx.quit();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;
    use std::io::Write;

    #[gpui::test]
    fn test_key_bindings_drive_canvas(cx: &mut TestAppContext) {
        cx.update(init_keymap);
        let (board, cx) = cx.add_window_view(|window, cx| {
            let board = Whiteboard::new(Theme::dark(), Settings::default(), window, cx);
            window.focus(&board.focus_handle);
            board
        });
        cx.run_until_parked();
        let canvas = board.read_with(cx, |board, _| board.canvas.clone());

        cx.simulate_keystrokes("2");
        canvas.read_with(cx, |canvas, _| {
            assert_eq!(canvas.active_color(), Color::Red);
            // Controls and root draw from the canvas theme
            assert_eq!(canvas.theme.canvas_background, Theme::dark().canvas_background);
        });

        canvas.update(cx, |canvas, cx| {
            canvas.start_gesture(cx);
            canvas.add_point(stroke::Point::new(4.0, 4.0), cx);
            canvas.end_gesture(cx);
        });
        cx.simulate_keystrokes("ctrl-z");
        cx.run_until_parked();

        canvas.read_with(cx, |canvas, _| {
            assert!(canvas.board().history().is_empty());
            assert_eq!(canvas.active_color(), Color::Red);
        });
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load_settings(None).unwrap(), Settings::default());
    }

    #[test]
    fn loads_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "stroke_width": 6.0 }}"#).unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.stroke_width, 6.0);
        assert_eq!(settings.controls_padding, 10.0);
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let err = load_settings(Some(Path::new("/nonexistent/settings.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/settings.json"));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "swatch_fraction": -1 }}"#).unwrap();
        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("swatch_fraction"));
    }

    #[test]
    fn parses_cli_flags() {
        let args = Args::parse_from([
            "whiteboard",
            "--theme",
            "dark",
            "--log-level",
            "debug",
            "--settings",
            "board.json",
        ]);
        assert_eq!(args.theme, ThemeChoice::Dark);
        assert_eq!(args.log_level, LevelFilter::Debug);
        assert_eq!(args.settings, Some(PathBuf::from("board.json")));
    }

    #[test]
    fn default_cli_flags() {
        let args = Args::parse_from(["whiteboard"]);
        assert_eq!(args.theme, ThemeChoice::Light);
        assert_eq!(args.log_level, LevelFilter::Info);
        assert!(args.settings.is_none());
    }
}
