// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use virgo_i18n::config;
use virgo_i18n::{Error, I18n, Locale, LocalizationTable};

const HELP: &str = "\
virgo-i18n: inspect the Virgo UI dictionary

USAGE:
  virgo-i18n locales
  virgo-i18n get <KEY> [--lang CODE]
  virgo-i18n keys [--lang CODE]
  virgo-i18n check [--dir DIR]

OPTIONS:
  --lang CODE   Locale code or tag to read, e.g. `it` or `it-IT`
                (defaults to config, then system locale)
  --dir DIR     Check <DIR>/<code>.toml instead of the embedded strings
  -h, --help    Print this help
";

enum Command {
    Locales,
    Get(String),
    Keys,
    Check,
}

struct Args {
    lang: Option<String>,
    dir: Option<PathBuf>,
    command: Command,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let lang = args.opt_value_from_str("--lang")?;
    let dir = args.opt_value_from_str("--dir")?;
    let command = match args.subcommand()?.as_deref() {
        Some("locales") => Command::Locales,
        Some("get") => Command::Get(args.free_from_str()?),
        Some("keys") => Command::Keys,
        Some("check") => Command::Check,
        _ => return Ok(None),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {rest:?}"),
        });
    }
    Ok(Some(Args { lang, dir, command }))
}

fn run(args: Args) -> virgo_i18n::Result<()> {
    match args.command {
        Command::Locales => {
            for locale in Locale::ALL {
                let marker = if locale == virgo_i18n::default_locale() {
                    " (default)"
                } else {
                    ""
                };
                println!("{}\t{}{marker}", locale.code(), locale.display_name());
            }
        }
        Command::Get(key) => {
            let i18n = translator(args.lang)?;
            println!("{}", i18n.try_tr(&key)?);
        }
        Command::Keys => {
            let i18n = translator(args.lang)?;
            for key in LocalizationTable::global()?.keys(i18n.current_locale()) {
                println!("{key}");
            }
        }
        Command::Check => {
            let loaded;
            let table = match &args.dir {
                Some(dir) => {
                    loaded = LocalizationTable::load_from_dir(dir)?;
                    &loaded
                }
                None => LocalizationTable::global()?,
            };
            table.verify_key_parity()?;
            println!("ok: {} locales share the same keys", Locale::ALL.len());
        }
    }
    Ok(())
}

/// An explicit `--lang` must name a supported locale, as a code or a full
/// tag; otherwise resolve like the site does.
fn translator(lang: Option<String>) -> virgo_i18n::Result<I18n> {
    if let Some(code) = &lang {
        code
            .parse::<Locale>()
            .ok()
            .or_else(|| Locale::from_language_tag(code))
            .ok_or_else(|| Error::UnsupportedLocale(code.clone()))?;
    }
    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "could not read settings, using defaults");
        config::Config::default()
    });
    I18n::new(lang, &config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
