use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
            PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};

mod actions;
mod activator;
mod command_id;
mod config;
mod dispatcher;
mod keys;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod views;

use actions::{Action, GlobalAction};
use config::Config;
use middleware::{keyboard::KeyboardMiddleware, logging::LoggingMiddleware};
use score_sheet::Document;
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init();
    log::info!("Starting score-pad (log: {})", log_file.display());

    let config = Config::load();
    let document = load_document(&config)?;
    let state = AppState::from_document(document)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        // Release events are needed for the help-overlay toggle.
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize store with middleware, in execution order
    let mut store = Store::new(state);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        PopKeyboardEnhancementFlags,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;
    log::info!("Exiting score-pad");
    Ok(())
}

/// The CLI argument wins over the config; with neither, fall back to the
/// built-in demo document so the keys are exercisable out of the box.
/// Sample documents, including a plate-only one for the contact-sheet grid,
/// live under `demos/`.
fn load_document(config: &Config) -> anyhow::Result<Document> {
    let path = std::env::args().nth(1).or_else(|| config.document.clone());
    match path {
        Some(path) => Document::load(Path::new(&path))
            .with_context(|| format!("loading score document {path}")),
        None => {
            log::info!("No document given, using the built-in demo sheet");
            Ok(demo_document())
        }
    }
}

fn demo_document() -> Document {
    let json = r#"{
        "experiments": [
            {
                "id": "exp-32400",
                "title": "mbk-2 @ 22C (plate 1)",
                "controls": [
                    {"group": "emb-32400", "label": "Strong embryonic lethality"},
                    {"group": "emb-32400", "label": "Medium embryonic lethality"},
                    {"group": "emb-32400", "label": "Weak embryonic lethality"},
                    {"group": "ste-32400", "label": "Strong sterility"},
                    {"group": "ste-32400", "label": "Medium sterility"},
                    {"group": "ste-32400", "label": "Weak sterility"}
                ]
            },
            {
                "id": "exp-32401",
                "title": "mbk-2 @ 22C (plate 2)",
                "controls": [
                    {"group": "emb-32401", "label": "Strong embryonic lethality"},
                    {"group": "emb-32401", "label": "Medium embryonic lethality"},
                    {"group": "emb-32401", "label": "Weak embryonic lethality"},
                    {"group": "ste-32401", "label": "Strong sterility"},
                    {"group": "ste-32401", "label": "Medium sterility"},
                    {"group": "ste-32401", "label": "Weak sterility"}
                ]
            },
            {
                "id": "exp-32402",
                "title": "zyg-1 @ 25C",
                "controls": [
                    {"group": "emb-32402", "label": "Strong embryonic lethality"},
                    {"group": "emb-32402", "label": "Medium embryonic lethality"},
                    {"group": "emb-32402", "label": "Weak embryonic lethality"},
                    {"group": "ste-32402", "label": "Strong sterility"},
                    {"group": "ste-32402", "label": "Medium sterility"},
                    {"group": "ste-32402", "label": "Weak sterility"}
                ]
            }
        ],
        "plate": {"rows": 8, "cols": 12, "interesting": ["B03", "E07"]}
    }"#;

    Document::from_json(json).expect("demo document is well-formed")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().ui.running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C quits ahead of routing, keeping the router's
                // Control-bypass rule intact.
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    store.dispatch(Action::Global(GlobalAction::Quit));
                    continue;
                }

                let Some(input) = keys::from_terminal(&key) else {
                    continue;
                };
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        store.dispatch(Action::Key(input));
                    }
                    KeyEventKind::Release => {
                        store.dispatch(Action::KeyRelease(input));
                    }
                }
            }
        }
    }

    Ok(())
}
