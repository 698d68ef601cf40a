use std::env;
use std::process;

use dotenv::dotenv;
use proctitle::set_title;
use rocket_slog::SlogFairing;

use event_registration_api::server;
use event_registration_api::config::Config;
use event_registration_api::db::init_pool;
use event_registration_api::logger::get_logger;

fn get_env() -> String {
    match env::var("ENV") {
        Ok(ref v) if v == &"test".to_string() => String::from("testing"),
        Ok(v) => v.to_lowercase(),
        Err(_) => String::from("development"),
    }
}

fn main() {
    set_title("event-registration: server");
    dotenv().ok();

    let name = get_env();
    let config = Config::from(name.as_str()).expect("Failed to get config");

    let logger = get_logger(&config);

    // database
    let connection_pool =
        init_pool(&config.database_url, config.database_max_pool_size)
            .expect("Failed to create connection pool");

    let error = server(&config)
        .expect("Failed to configure server")
        .attach(SlogFairing::new(logger))
        .manage(connection_pool)
        .manage(config)
        .launch();

    eprintln!("Failed to launch server: {}", error);
    process::exit(1);
}
