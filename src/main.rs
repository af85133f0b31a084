#[tokio::main]
async fn main() {
  // Minimal CLI: --version and --help; everything else is env-driven
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("certvault {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    eprintln!("Usage: certvault [--version]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CERTVAULT_ADDR         listen address (default 127.0.0.1:8019)");
    eprintln!("  CERTVAULT_STORAGE_DIR  certificate storage directory");
    return;
  }

  if let Err(e) = certvault::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
