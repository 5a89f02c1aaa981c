use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = ".data/contacts.db";
pub const DEFAULT_LOG_FILTER: &str = "contacts=info";

pub const USAGE: &str = "\
Contacts - contact book with addresses, emails and phone numbers

Usage: contacts [OPTIONS]

Options:
  -f, --file <PATH>      Database file path (default: .data/contacts.db, env CONTACTS_DB)
  -u, --user <NAME>      Acting user recorded on every change (env CONTACTS_USER)
  --export <JSON_PATH>   Write all contacts to a JSON file and exit
  -h, --help             Show this help

Logging is controlled with RUST_LOG (default: contacts=info).";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub export_path: Option<PathBuf>,
    pub log_filter: String,
    pub username: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Builds the configuration from the process environment and arguments.
    /// Call `dotenvy::dotenv()` first so `.env` values are visible.
    pub fn from_env_and_args() -> Result<Invocation, String> {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Defaults, then `env`, then `args`; later sources win.
    pub fn resolve<I, E>(args: I, env: E) -> Result<Invocation, String>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            db_path: env("CONTACTS_DB")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            export_path: None,
            log_filter: env("RUST_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            username: env("CONTACTS_USER").filter(|s| !s.trim().is_empty()),
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" | "-f" => {
                    config.db_path = args
                        .next()
                        .map(PathBuf::from)
                        .ok_or("--file requires a path argument")?;
                }
                "--user" | "-u" => {
                    config.username = Some(args.next().ok_or("--user requires a name")?);
                }
                "--export" => {
                    config.export_path = Some(
                        args.next()
                            .map(PathBuf::from)
                            .ok_or("--export requires a JSON file path")?,
                    );
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                other => return Err(format!("Unknown argument: {}", other)),
            }
        }

        Ok(Invocation::Run(config))
    }
}
