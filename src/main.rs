fn main() {
    if let Err(e) = hello_ci::cli::run() {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
