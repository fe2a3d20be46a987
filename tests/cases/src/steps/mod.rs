use chrono::prelude::{DateTime, Local};
use std::io::Write;
use std::thread;
use std::time::Duration;

pub mod checks;
pub mod timers;

pub fn sleep_ms(milliseconds: u64) {
    thread::sleep(Duration::from_millis(milliseconds));
}

/// Installs the timestamped console logger once per process.
pub fn init_logger() {
    let _ = env_logger::builder()
        .format(|buf, record| {
            let now: DateTime<Local> = Local::now();
            let now_str = now.format("%H:%M:%S.%3f").to_string();
            writeln!(buf, "{:5}: {} - {}", record.level(), now_str, record.args())
        })
        .try_init();
}
