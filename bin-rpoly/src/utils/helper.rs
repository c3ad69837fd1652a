use std::any::Any;
use std::path::Path;
use std::time::Instant;
use log::info;
use rpoly::Polynomial;
use super::CliError;

pub fn init_logger() {
    use simplelog::*;

    let res = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto
    );

    if let Err(e) = res { 
        eprintln!("failed to initialize logger: {e}");
    }
}

// Runs `proc` and logs how long it took.
pub fn timed<F, R>(label: &str, proc: F) -> R 
where F: FnOnce() -> R { 
    let start = Instant::now();
    let res = proc();
    info!("{label}: {:?}", start.elapsed());
    res
}

pub fn guard_panic<F, R>(f: F) -> Result<R, CliError>
where F: FnOnce() -> Result<R, CliError> + std::panic::UnwindSafe {
    std::panic::catch_unwind(f).unwrap_or_else(|payload| {
        Err(CliError::Panic(panic_message(payload)))
    })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String { 
    if let Some(s) = payload.downcast_ref::<String>() { 
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() { 
        s.to_string()
    } else { 
        "unknown panic payload".to_string()
    }
}

// `[[exp, coeff], ...]`, inserted in the given order.
pub fn parse_poly(s: &str) -> Result<Polynomial, CliError> { 
    let pairs: Vec<(i64, f64)> = serde_json::from_str(s).map_err(|source| 
        CliError::Parse { input: s.to_string(), source }
    )?;
    let p = Polynomial::from_terms(pairs)?;
    Ok(p)
}

pub fn load_poly(arg: &str) -> Result<Polynomial, CliError> { 
    let path = Path::new(arg);
    if path.is_file() { 
        let json = std::fs::read_to_string(path).map_err(|source| 
            CliError::Io { path: arg.to_string(), source }
        )?;
        parse_poly(json.trim())
    } else { 
        parse_poly(arg)
    }
}
