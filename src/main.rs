use tagstrip::app::{self, App};
use tagstrip::logging;
use tagstrip::palette::Palette;
use tagstrip::terminal::{setup_panic_hook, TerminalManager};
use tagstrip::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, MouseButton, MouseEventKind};
use futures::StreamExt;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
tagstrip - a terminal tag-input editor

Usage: tagstrip [LABEL...]

Positional LABELs replace the default palette
(HTML, CSS, JavaScript, React, Next.js, Tailwind).

Options:
  -h, --help       Print this help
  -V, --version    Print the version

Environment:
  TAGSTRIP_LOG     Write tracing output to this file (filtered by RUST_LOG)";

/// Palette labels from the command line, or None when the defaults apply.
fn parse_args() -> Result<Option<Vec<String>>> {
    let mut labels = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("tagstrip {}", VERSION);
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                color_eyre::eyre::bail!("unknown flag: {flag} (try --help)");
            }
            _ => labels.push(arg),
        }
    }
    Ok(if labels.is_empty() { None } else { Some(labels) })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let palette = match parse_args()? {
        Some(labels) => Palette::new(labels)?,
        None => Palette::default(),
    };

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(palette);

    let result = run(&mut manager, &mut app).await;
    drop(manager); // restore the terminal before reporting errors
    result
}

/// Event loop: draw, then apply the next terminal event.
///
/// All state transitions are synchronous; the stream is only awaited for
/// the next input event.
async fn run(manager: &mut TerminalManager, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();
    let mut redraw = true;

    loop {
        if redraw {
            manager.terminal().draw(|frame| ui::render(frame, app))?;
            redraw = false;
        }

        let Some(event) = events.next().await else {
            return Ok(());
        };

        match event? {
            Event::Key(key) => {
                redraw = app::handle_key(app, key);
                if app.should_quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(area) = app.hit_registry.hit_test(mouse.column, mouse.row).copied()
                    {
                        app::handle_click(app, area, mouse.column, mouse.row);
                        redraw = true;
                    }
                }
                MouseEventKind::Moved => {
                    redraw = app.hit_registry.update_hover(mouse.column, mouse.row);
                }
                _ => {}
            },
            Event::Paste(text) => {
                redraw = app::handle_paste(app, &text);
            }
            Event::Resize(_, _) => {
                redraw = true;
            }
            _ => {}
        }
    }
}
