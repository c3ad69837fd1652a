use log::error;
use clap::Parser;
use super::cli::CliArgs;
use super::cmd;
use crate::utils::*;

pub struct App {
    args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        App { args: CliArgs::parse() }
    }

    pub fn run(self) -> Result<String, CliError> { 
        let CliArgs { command, debug, json } = self.args;

        if debug { 
            init_logger();
        }

        let res = timed("time", || 
            guard_panic(|| cmd::run(command, json))
        );

        if let Err(e) = &res { 
            error!("{e}");
        }
        res
    }
}
