// Vkbd CLI
// Standalone driver: pointer events in, synthetic key events out

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use vkbd_core::{
    Discipline, Injector, Keyboard, PointerSource, Settings, UinputKeyboard, VisualState,
};

/// Screen size assumed when no pointer device reports an absolute extent.
const FALLBACK_SCREEN: (i32, i32) = (1920, 1080);

/// Poll granularity; bounds how long shutdown waits on a quiet pointer.
const POLL_TIMEOUT_MS: i32 = 500;

/// On-screen virtual keyboard
#[derive(Parser, Debug)]
#[command(name = "vkbd")]
#[command(about = "On-screen virtual keyboard", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Window width; 0 = screen width, -n = screen width / n
    #[arg(long, allow_hyphen_values = true, value_name = "PIXELS")]
    width: Option<i32>,

    /// Window height; 0 = screen height, -n = screen height / n
    #[arg(long, allow_hyphen_values = true, value_name = "PIXELS")]
    height: Option<i32>,

    /// Window x position; negative offsets from the right screen edge
    #[arg(long, allow_hyphen_values = true, value_name = "PIXELS")]
    x: Option<i32>,

    /// Window y position; negative offsets from the bottom screen edge
    #[arg(long, allow_hyphen_values = true, value_name = "PIXELS")]
    y: Option<i32>,

    /// Pointer device name filter
    #[arg(short, long, value_name = "DEVICE")]
    device: Option<String>,

    /// Chording discipline: "toggle" or "momentary"
    #[arg(long, value_name = "MODE")]
    discipline: Option<String>,

    /// List available pointer devices
    #[arg(long)]
    list_devices: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    check_config: bool,

    /// Print the computed key geometry and exit
    #[arg(long)]
    print_layout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Settings::load_default().context("failed to load default config")?,
    };

    if let Some(w) = args.width {
        settings.placement.width = w;
    }
    if let Some(h) = args.height {
        settings.placement.height = h;
    }
    if let Some(x) = args.x {
        settings.placement.x = x;
    }
    if let Some(y) = args.y {
        settings.placement.y = y;
    }
    if let Some(name) = &args.discipline {
        settings.discipline = Discipline::from_name(name)
            .with_context(|| format!("unknown discipline: {}", name))?;
    }
    if args.device.is_some() {
        settings.device_filter = args.device.clone();
    }

    Ok(settings)
}

fn list_devices() -> Result<()> {
    let devices = PointerSource::list_devices().context("no pointer devices")?;
    println!("Found {} pointer device(s):", devices.len());
    for device in &devices {
        match &device.path {
            Some(path) => println!("  {}: {} ({})", device.index, device.name, path),
            None => println!("  {}: {}", device.index, device.name),
        }
    }
    Ok(())
}

fn print_layout(keyboard: &Keyboard) {
    for view in keyboard.keys() {
        println!(
            "{:3}  {:<10} {:>5} {:>5} {:>5} {:>5}",
            view.index, view.label, view.rect.x, view.rect.y, view.rect.w, view.rect.h
        );
    }
}

fn run(args: Args) -> Result<()> {
    let settings = load_settings(&args)?;

    if args.check_config {
        println!("Configuration is valid");
        println!(
            "  layout: {} keys in {} rows, discipline {:?}",
            settings.layout.len(),
            settings.layout.row_count(),
            settings.discipline
        );
        return Ok(());
    }

    if args.print_layout {
        let placement = settings
            .placement
            .resolve(FALLBACK_SCREEN.0, FALLBACK_SCREEN.1);
        let mut keyboard =
            Keyboard::new(settings.layout, settings.buttons, settings.discipline);
        keyboard.resize(placement.width, placement.height);
        print_layout(&keyboard);
        return Ok(());
    }

    let mut source = PointerSource::with_filter(settings.device_filter.as_deref())
        .context("failed to open pointer devices")?;
    info!("pointer devices: {}", source.device_names().join(", "));

    let screen = source.surface_hint().unwrap_or(FALLBACK_SCREEN);
    let placement = settings.placement.resolve(screen.0, screen.1);
    info!(
        "keyboard surface {}x{} at ({}, {})",
        placement.width, placement.height, placement.x, placement.y
    );

    let mut keyboard = Keyboard::new(settings.layout, settings.buttons, settings.discipline);
    keyboard.resize(placement.width, placement.height);
    source.set_surface(placement.width, placement.height);

    let mut injector = UinputKeyboard::new().context("failed to create uinput device")?;

    let shutdown = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&shutdown))
        .context("failed to install SIGINT handler")?;
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&shutdown))
        .context("failed to install SIGTERM handler")?;

    while !shutdown.load(Ordering::Relaxed) {
        let events = source
            .poll_events(POLL_TIMEOUT_MS)
            .context("pointer poll failed")?;
        for event in events {
            let batch = keyboard.handle(event);
            for injection in &batch {
                debug!("inject {:?}", injection);
            }
            injector.apply(&batch);
        }
    }

    // Leave no key stuck on the host.
    let batch = keyboard.release_all();
    if !batch.is_empty() {
        info!("releasing {} key(s) on shutdown", batch.len());
        injector.apply(&batch);
    }
    debug_assert!(keyboard.keys().all(|v| v.state == VisualState::Normal));

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    builder.init();

    if args.list_devices {
        return list_devices();
    }

    run(args)
}
