use log::info;
use rpoly::Polynomial;
use super::cli::Cmd;
use crate::utils::*;

type Res = Result<String, CliError>;

pub fn run(cmd: Cmd, json: bool) -> Res { 
    match cmd { 
        Cmd::Show { poly } => { 
            let p = load_poly(&poly)?;
            render(&p, json)
        },
        Cmd::Add { poly, other } => { 
            let (p, q) = (load_poly(&poly)?, load_poly(&other)?);
            let r = p.add(&q)?;
            info!("({p}) + ({q}) = {r}");
            render(&r, json)
        },
        Cmd::Sub { poly, other } => { 
            let (p, q) = (load_poly(&poly)?, load_poly(&other)?);
            let r = p.sub(&q)?;
            info!("({p}) - ({q}) = {r}");
            render(&r, json)
        },
        Cmd::Mul { poly, scalar } => { 
            let p = load_poly(&poly)?;
            let r = p.multiply(scalar);
            info!("{scalar} * ({p}) = {r}");
            render(&r, json)
        },
        Cmd::Diff { poly } => { 
            let p = load_poly(&poly)?;
            let r = p.differentiate();
            info!("d/dx ({p}) = {r}");
            render(&r, json)
        },
        Cmd::Eval { poly, x } => { 
            let p = load_poly(&poly)?;
            let v = p.evaluate(x);
            info!("({p})[x = {x}] = {v}");
            Ok(v.to_string())
        }
    }
}

fn render(p: &Polynomial, json: bool) -> Res { 
    if json { 
        Ok(serde_json::to_string(p)?)
    } else if p.is_zero() { 
        Ok("0".to_string())
    } else { 
        Ok(p.to_string())
    }
}
