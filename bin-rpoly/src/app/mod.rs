mod app;
mod cli;
mod cmd;

pub use app::App;
