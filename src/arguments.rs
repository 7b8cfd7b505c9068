/// Centralized argument handling
///
/// Consolidates command-line argument scanning and debug flag checking so the
/// logger and config layers do not each re-parse `std::env::args`.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
///
/// Tests and auxiliary binaries can override the default `env::args()`
/// collection via `set_cmd_args`.
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value following a flag, e.g. `--port 9090`
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Port override for the webserver, `--port <u16>`
pub fn get_port_override() -> Option<u16> {
    get_arg_value("--port").and_then(|v| v.parse().ok())
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// =============================================================================

/// Upstream API calls debug mode
pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api")
}

/// Quote merge / fallback chain debug mode
pub fn is_debug_quotes_enabled() -> bool {
    has_arg("--debug-quotes")
}

/// Cache hit/miss debug mode
pub fn is_debug_cache_enabled() -> bool {
    has_arg("--debug-cache")
}

/// Webserver request debug mode
pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

pub fn print_help() {
    println!("foliodash - portfolio dashboard service");
    println!();
    println!("USAGE:");
    println!("  foliodash [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --port <PORT>        Webserver port (default 8080)");
    println!("  --debug-api          Log upstream quote provider traffic");
    println!("  --debug-quotes       Log the per-symbol fallback chain");
    println!("  --debug-cache        Log cache hits and refreshes");
    println!("  --debug-webserver    Log HTTP request handling");
    println!("  -h, --help           Show this help");
    println!();
    println!("ENVIRONMENT:");
    println!("  SERPAPI_KEY          API key for live quotes; without it the");
    println!("                       service serves synthesized fallback data");
}
