mod app;

use app::App;
use iced::Application;

use ramadan_timetable::logging::{init_logging, DEFAULT_LEVEL};

fn main() -> iced::Result {
    if let Err(e) = init_logging(DEFAULT_LEVEL) {
        eprintln!("{}", e);
    }
    println!("Ramadan Timetable");
    println!("-----------------");
    println!("Suhoor and iftar times for Mesquita Hazrat Hamza, Porto.");
    println!("Settings are stored in local_storage.json ($RAMADAN_TIMETABLE_HOME or the working directory).");
    println!("CLI: cargo run --bin ramadan-timetable-cli -- --help");
    println!();
    App::run(iced::Settings::default())
}
