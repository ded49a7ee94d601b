mod ui;

use boiled_corn::audio::CuePlayer;
use boiled_corn::beach::{
    key_down, key_up, process_tick, BeachEvent, BeachGame, RoundPhase, Variant, LOGIC_RATE_HZ,
};
use boiled_corn::character::Guy;
use boiled_corn::core::LogicClock;
use boiled_corn::input::{handle_global_key, KeyTransition, KeyTranslator};
use boiled_corn::settings::Settings;
use boiled_corn::utils::{persistence, version_line};
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const LOG_FILE: &str = "boiled-corn.log";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CliOptions {
    variant: Option<Variant>,
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliCommand {
    Run(CliOptions),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--simple" => options.variant = Some(Variant::Simple),
            "--advanced" => options.variant = Some(Variant::Advanced),
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }
    Ok(CliCommand::Run(options))
}

fn print_help() {
    println!("Boiled Corn - a beach minigame\n");
    println!("Usage: boiled-corn [options]\n");
    println!("Options:");
    println!("  --simple     Five towels, slower beach");
    println!("  --advanced   Six towels (default)");
    println!("  --seed N     Seed the random number generator");
    println!("  --version    Show version information");
    println!("  --help       Show this help message");
    println!("\nKeys: Space throw, M mute, F fullscreen, Esc quit");
    println!("\nTerminals without key release events: tap Space to wind up and");
    println!("tap it again to throw. Holding Space throws once the key starts");
    println!("repeating.");
}

/// Log to a file under the data directory; the terminal belongs to the UI.
fn init_logging() -> io::Result<PathBuf> {
    let path = persistence::data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(path)
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(CliCommand::Run(options)) => options,
        Ok(CliCommand::Version) => {
            println!("{}", version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'boiled-corn --help' for usage.");
            std::process::exit(1);
        }
    };

    let log_path = init_logging()?;
    log::info!("{} starting, log at {}", version_line(), log_path.display());

    let settings_path = Settings::default_path()?;
    let mut settings = Settings::load_from(&settings_path);
    let variant = options.variant.unwrap_or(settings.variant);

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    } else {
        log::info!("terminal has no key release events; tap Space again to throw");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = Session {
        game: BeachGame::new(variant),
        guy: Guy::new(),
        rng,
        player: CuePlayer::new(settings.mute),
        translator: KeyTranslator::new(release_events),
    };
    let result = session.run(&mut terminal, &mut settings, &settings_path);

    // Cleanup terminal
    if release_events {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("session ended");
    result
}

struct Session {
    game: BeachGame,
    guy: Guy,
    rng: StdRng,
    player: CuePlayer,
    translator: KeyTranslator,
}

impl Session {
    fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        settings: &mut Settings,
        settings_path: &Path,
    ) -> io::Result<()> {
        let start = Instant::now();
        let mut clock = LogicClock::new(LOGIC_RATE_HZ);

        while !self.game.unload_requested {
            terminal.draw(|frame| {
                let area = frame.size();
                ui::render_beach(frame, area, &self.game, &self.guy, &*settings);
            })?;

            if event::poll(clock.until_next_tick(start.elapsed()))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let action = handle_global_key(settings, key.code);
                        if action.needs_save() {
                            self.player.set_muted(settings.mute);
                            settings.save_to(settings_path)?;
                        }
                    }

                    let charging = matches!(self.game.phase, RoundPhase::Charging { .. });
                    let now = Instant::now();
                    let events = match self.translator.translate(key, charging, now) {
                        Some(KeyTransition::Down(input)) => {
                            key_down(&mut self.game, &mut self.guy, input, &mut self.rng)
                        }
                        Some(KeyTransition::Up(input)) => key_up(&mut self.game, &self.guy, input),
                        None => Vec::new(),
                    };
                    self.dispatch(terminal, &events)?;
                }
            }

            for _ in 0..clock.ticks_due(start.elapsed()) {
                let events = process_tick(&mut self.game, &mut self.guy, &mut self.rng);
                self.dispatch(terminal, &events)?;
            }
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        events: &[BeachEvent],
    ) -> io::Result<()> {
        if events.is_empty() {
            return Ok(());
        }
        let output = self.player.apply_events(events);
        if output.ring_bell {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }
        Ok(())
    }
}
