//! workcal main entrypoint.

use workcal::run;

fn main() {
    println!();
    if let Err(e) = run() {
        workcal::ui::messages::error(e);
        std::process::exit(1);
    }
}
