//! emchecklist main entrypoint.

use emchecklist::run;
use emchecklist::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
