//! bikeshare main entrypoint.

use bikeshare::run;

fn main() {
    if let Err(e) = run() {
        if e.is_user_exit() {
            return;
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
