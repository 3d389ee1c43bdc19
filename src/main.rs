use crossterm::event::{self, Event};
use flappy::cli::{parse_args, Command, LaunchOptions, USAGE};
use flappy::input::map_key;
use flappy::terminal::{install_panic_hook, TerminalGuard};
use flappy::{build_info, logger, ui, App, Control, TICK_INTERVAL_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if logger::init() {
        tracing::debug!("logging enabled");
    }

    // Setup terminal; the guard restores it on every exit path
    install_panic_hook();
    let mut guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &options);
    let restored = guard.restore();

    result?;
    restored
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    options: &LaunchOptions,
) -> io::Result<()> {
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut app = App::new(rng);
    tracing::info!(seed = ?options.seed, "game started");

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| ui::draw(frame, &app.world, app.phase))?;
            needs_redraw = false;
        }

        // Wait for input until the next tick is due; block once the timer stops
        let timeout = if app.is_ticking() {
            tick_interval.saturating_sub(last_tick.elapsed())
        } else {
            Duration::from_secs(60)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if let Some(input) = map_key(&key_event) {
                        if app.handle_input(input) == Control::Exit {
                            break;
                        }
                    }
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        if app.is_ticking() && last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            if app.on_tick() == Control::Redraw {
                needs_redraw = true;
            }
        }
    }

    Ok(())
}
