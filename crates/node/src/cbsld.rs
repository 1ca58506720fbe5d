fn main() {
    if let Err(err) = cbsl_node::run_entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
