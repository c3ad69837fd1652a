mod app;
mod utils;
use app::App;

fn main() {
    match App::new().run() { 
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code())
        }
    }
}
