use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd,

    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Print resulting polynomials as JSON term lists.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool
}

// Each <POLY> is a JSON array of [exponent, coefficient] pairs, 
// or a path to a file containing one.
#[derive(Subcommand, Debug)]
pub enum Cmd {
    Show {
        poly: String,
    },

    Add {
        poly: String,
        other: String,
    },

    Sub {
        poly: String,
        other: String,
    },

    Mul {
        poly: String,

        #[arg(short, long, allow_negative_numbers = true)]
        scalar: f64,
    },

    Diff {
        poly: String,
    },

    Eval {
        poly: String,

        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,
    },
}
