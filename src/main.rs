use expense_splitter::{app, common::logging};

fn main() {
    logging::init_tracing();

    if let Err(e) = app::run(std::env::args()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
