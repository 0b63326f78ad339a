use std::process::ExitCode;

use bevy::prelude::*;
use clap::Parser;

mod engine;
mod error;
mod tools;

use engine::core::app_setup::create_app;
use engine::core::config::{Args, BrowserSettings};

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match BrowserSettings::from_args(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match create_app(settings).run() {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}
