//! rafflepick main entrypoint.

use rafflepick::run;
use rafflepick::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
