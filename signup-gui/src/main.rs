use std::{error::Error, io::Write, path::PathBuf, process};

use iced::{Settings, Size, Theme};
use tracing::{error, info};

use signup::config::Config;
use signup_gui::{
    app::App,
    dir::SignupDirectory,
    logger::{level_filter, parse_log_level, setup_logger},
    VERSION,
};
use signup_ui::component::text;

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(SignupDirectory),
    ConfigPath(PathBuf),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: signup-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of the data directory (logs, default config location)
    --config <PATH>     Path of the configuration file
    -v, --version       Display signup-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--datadir" => match args.next() {
                Some(a) => res.push(Arg::DatadirPath(SignupDirectory::new(PathBuf::from(a)))),
                None => return Err("missing arg to --datadir".into()),
            },
            "--config" => match args.next() {
                Some(a) => res.push(Arg::ConfigPath(PathBuf::from(a))),
                None => return Err("missing arg to --config".into()),
            },
            a => return Err(format!("unknown argument '{}'", a).into()),
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let (datadir, config_path) = match args.as_slice() {
        [] => (SignupDirectory::new_default()?, None),
        [Arg::DatadirPath(datadir)] => (datadir.clone(), None),
        [Arg::ConfigPath(path)] => (SignupDirectory::new_default()?, Some(path.clone())),
        [Arg::DatadirPath(datadir), Arg::ConfigPath(path)]
        | [Arg::ConfigPath(path), Arg::DatadirPath(datadir)] => {
            (datadir.clone(), Some(path.clone()))
        }
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !datadir.exists() {
        datadir.init()?;
    }

    // An explicitly given configuration file must exist.
    let config = match config_path {
        Some(path) => Config::from_file(&path)?,
        None => Config::from_file_or_default(&datadir.config_file())?,
    };

    let log_level = parse_log_level()?.unwrap_or_else(|| level_filter(config.log_level));
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();

    info!("Starting signup-gui v{}", VERSION);
    let app = App::from_config(&config)?;

    let settings = Settings {
        id: Some("Signup".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        ..Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 560.0,
            height: 820.0,
        },
        min_size: Some(Size {
            width: 400.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| Theme::Light)
        .settings(settings)
        .window(window_settings)
        .run_with(move || (app, iced::Task::none()))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("signup-gui")
            .chain(line.split(' ').filter(|a| !a.is_empty()))
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(Some(vec![]), parse_args(args("")).ok());
        assert!(parse_args(args("--meth")).is_err());
        assert!(parse_args(args("--datadir")).is_err());
        assert!(parse_args(args("--config")).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(SignupDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(args("--datadir hello")).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ConfigPath(PathBuf::from("signup.toml")),
                Arg::DatadirPath(SignupDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(args("--config signup.toml --datadir hello")).ok()
        );
    }
}
