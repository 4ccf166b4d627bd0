//! # gomarket-cart
//!
//! Entry point; the setup lives in `lib.rs` for testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    cart_cli::run().await
}
