use contacts::config::{Config, Invocation, USAGE};
use contacts::db::schema;

fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env_and_args() {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    contacts::logging::init(&config.log_filter);

    if let Some(dir) = config.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: cannot create {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    }

    if let Some(json_path) = &config.export_path {
        let conn = match rusqlite::Connection::open(&config.db_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error opening database: {}", e);
                std::process::exit(1);
            }
        };
        let result = schema::initialize(&conn)
            .and_then(|_| contacts::export::export_json(&conn, json_path));
        match result {
            Ok(stats) => {
                println!("Exported to {}", json_path.display());
                println!("  Contacts: {}", stats.contacts);
                println!("  Addresses: {}", stats.addresses);
                println!("  Emails: {}", stats.emails);
                println!("  Phone numbers: {}", stats.phone_numbers);
            }
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    contacts::cli::run(&config);
}
