use clap::Parser;

const HELLO_CI_LONG_VERSION: &str = concat!(
"version: ", env!("CARGO_PKG_VERSION"), "\n",
"git sha: ", env!("HELLO_CI_GIT_SHA"), "\n",
"build time (UTC): ", env!("HELLO_CI_BUILD_TIME"), "\n",
"target: ", env!("HELLO_CI_TARGET")
);

/// Takes no options; `--help` and `--version` are informational only.
#[derive(Parser)]
#[command(
    name = "hello-ci",
    version = env!("CARGO_PKG_VERSION"),
    long_version = HELLO_CI_LONG_VERSION,
    about = " 🚀 Hello World greeting generator for CI pipeline smoke tests",
    long_about = "Prints a greeting banner and writes output.json to the working directory.\n\
                  Reads ENV (default \"development\") and GITHUB_RUN_ID (default \"local\")."
)]
pub struct Cli {}
