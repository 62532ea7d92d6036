fn main() -> std::process::ExitCode {
    // delegate to the shared bootstrap in crates/server
    server::membership::launch()
}
