//! frotalog main entrypoint.

use frotalog::run;
use frotalog::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
