use anyhow::Result;
use clap::{arg, command};
use driftwm::Config;
use std::os::unix::fs::PermissionsExt;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

fn main() -> Result<()> {
    env_logger::init();

    let matches = command!("DriftWM Check")
        .about("Checks syntax of the configuration file")
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the default location otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m DriftWM version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match load_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            check_bindings(&config, verbose);
            check_autostart(&config, verbose);
        }
        Err(e) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration failed. Reason: {e:?} \x1b[0m");
        }
    }

    Ok(())
}

/// Parse the configuration from either the specified file (preferred) or
/// the default location, without validating it yet; validation is its own
/// check so its findings are reported under the right section.
///
/// # Errors
///
/// Errors if the file cannot be read (inadequate permissions, missing
/// explicit path) or is not valid TOML.
fn load_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_filename = match fspath {
        Some(fspath) => PathBuf::from(fspath),
        None => BaseDirectories::with_prefix("driftwm")?.place_config_file("config.toml")?,
    };
    if verbose {
        dbg!(&config_filename);
    }
    if !config_filename.exists() {
        println!(
            "\x1b[1;93mWARN: No config file found at {}, checking the compiled-in defaults.\x1b[0m",
            config_filename.display()
        );
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&config_filename)?;
    if verbose {
        dbg!(&contents);
    }
    Ok(toml::from_str(&contents)?)
}

/// Run the load-time validation the host never does: keysym and modifier
/// names, binding collisions, group references, and palette indices.
fn check_bindings(config: &Config, verbose: bool) {
    println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
    if verbose {
        if let Ok(binds) = config.keybinds() {
            for bind in &binds {
                println!("Keybind: {:?}", bind);
            }
        }
    }
    match config.validate() {
        Ok(()) => {
            println!("\x1b[0;92m    -> All keybinds OK\x1b[0m");
        }
        Err(err) => {
            println!("\x1b[1;91mERROR: {err}\x1b[0m");
        }
    }
}

/// The autostart script is optional, but when present it must be an
/// executable file or the host's startup hook will spawn nothing.
fn check_autostart(config: &Config, verbose: bool) {
    println!("\x1b[0;94m::\x1b[0m Checking autostart script . . .");
    let path = match config.autostart_path() {
        Some(path) => path,
        None => {
            println!(
                "\x1b[1;91mERROR: Could not expand autostart path `{}`\x1b[0m",
                config.autostart
            );
            return;
        }
    };
    if verbose {
        println!("Autostart path: {}", path.display());
    }
    match fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() && metadata.permissions().mode() & 0o111 != 0 => {
            println!("\x1b[0;92m    -> Autostart OK \x1b[0m");
        }
        Ok(_) => {
            println!(
                "\x1b[1;91mERROR: Found `{}`, but missing executable permissions!\x1b[0m",
                path.display()
            );
        }
        Err(_) => {
            println!(
                "\x1b[1;93mWARN: No autostart script at `{}`; the startup hook will be skipped.\x1b[0m",
                path.display()
            );
        }
    }
}
