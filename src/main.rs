//! rShiftPlan main entrypoint.

use rshiftplan::ui::messages::error;
use rshiftplan::{logging, run};

fn main() {
    logging::init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
