//! Command line entry point.

use fixer_app::{App, AppConfig, AppError, Script, ShortcutRegistry};
use std::path::Path;

fn run() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (script_path, config_path) = match args.as_slice() {
        [flag] if flag == "--shortcuts" => {
            ShortcutRegistry::print_all();
            return Ok(());
        }
        [script] => (script, None),
        [script, config] => (script, Some(config)),
        _ => {
            return Err(AppError::Usage(
                "usage: fixer <script.json> [config.json] | fixer --shortcuts".to_string(),
            ));
        }
    };

    let config = match config_path {
        Some(path) => AppConfig::load(Path::new(path))?,
        None => AppConfig::default(),
    };
    let script = Script::from_json(&std::fs::read_to_string(script_path)?)?;

    let mut app = App::new(config)?;
    app.run(&script)?;

    println!("{}", app.board_json()?);
    if let Some(path) = &app.config().svg_output {
        std::fs::write(path, app.svg())?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting FIXER");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
