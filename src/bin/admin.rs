//! Prints the registrations listed by the API server, the newest first.
use std::process;

use dotenv::dotenv;
use proctitle::set_title;

use event_registration_api::client::admin::View;
use event_registration_api::config::api_url;

fn main() {
    set_title("event-registration: admin");
    dotenv().ok();

    println!("{}", View::Loading);

    let view = View::fetch(&api_url());
    match view {
        View::Rows(_) => print!("{}", view),
        View::Error(_) => {
            eprintln!("{}", view);
            process::exit(1);
        },
        _ => println!("{}", view),
    }
}
