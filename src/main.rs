//! shiftlog main entrypoint.

use shiftlog::run;
use shiftlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
