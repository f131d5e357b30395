//! Startup banner and version line.

const BANNER: &str = r"
    __     __
   / /_   / /_   ____   _____ _____ _____ ____ _ ____   ___   _____
  / __ \ / __ \ / __ \ / ___// ___// ___// __  // __ \ / _ \ / ___/
 / /_/ // /_/ // /_/ /(__  )/ /__ / /   / /_/ // /_/ //  __// /
/_.___//_.___// .___//____/ \___//_/    \__,_// .___/ \___//_/
             /_/                             /_/";

/// Version string shown by `--version` and under the banner.
pub fn version_line() -> String {
    format!("Current bbpscraper version v{}", env!("CARGO_PKG_VERSION"))
}

/// Print the banner to stderr, keeping stdout for results.
pub fn print_banner() {
    eprintln!("{}\n{:>65}\n", BANNER, version_line());
}
