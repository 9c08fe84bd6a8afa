use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::{Path, PathBuf};

use gifscrub::animation::decode_file;
use gifscrub::config::{self, Config};
use gifscrub::scrubber::AnimationInfo;
use gifscrub::App;

/// Scrub through an animated GIF by scrolling
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scrub through animated GIFs frame by frame by scrolling in the terminal"
)]
struct Args {
    /// GIF file to scrub (defaults to animation.path from the config file)
    input: Option<PathBuf>,

    /// Print frame count, size and scroll extent instead of starting the viewer
    #[arg(long)]
    info: bool,

    /// Print --info output as JSON
    #[arg(long, requires = "info")]
    json: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/gifscrub-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/gifscrub-debug.log")
            .expect("Failed to open /tmp/gifscrub-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== GIFSCRUB DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let path = args
        .input
        .or_else(|| config_result.config.animation.path.clone())
        .ok_or_else(|| {
            eyre!(
                "No animation given. Pass a GIF path or set animation.path in ~/.config/gifscrub/config.toml"
            )
        })?;

    if args.info {
        if let Some(warning) = &config_result.warning {
            eprintln!("Warning: {}", warning);
        }
        return print_info(&path, &config_result.config, args.json);
    }

    let terminal = init_terminal()?;

    let mut app = App::new(&config_result.config);
    if let Some(warning) = &config_result.warning {
        app.notification.show_warning(warning);
    }
    // Decoding happens in the background; the UI comes up immediately
    app.load(path);

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== GIFSCRUB DEBUG SESSION ENDED ===");

    Ok(())
}

/// Decode synchronously and print a summary
fn print_info(path: &Path, config: &Config, json: bool) -> Result<()> {
    let animation = decode_file(path)?;
    let info = AnimationInfo::from_handle(&animation, config.scrub.pixels_per_frame());

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("file: {}", path.display());
        println!("frames: {}", info.frame_count);
        println!("size: {}x{}", info.width, info.height);
        println!("scroll extent: {}", info.scroll_extent);
    }
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Poll before render so a finished decode shows up in this frame
        app.poll_loader();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
