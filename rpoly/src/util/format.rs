use std::fmt::Display;
use itertools::Itertools;

pub fn fmt_mono(x: char, d: usize) -> String {
    match d { 
        0 => String::new(),
        1 => format!("*{x}"),
        _ => format!("*{x}^{d}")
    }
}

// Joins unsigned term strings with their signs: `a + b - c`. 
// The leading term carries its own sign only when negative.
pub fn lc<S, T>(terms: S) -> String
where 
    T: Display,
    S: IntoIterator<Item = (bool, T)>
{ 
    terms.into_iter().enumerate().map(|(i, (neg, t))| {
        match (i, neg) { 
            (0, false) => format!("{t}"),
            (0, true)  => format!("-{t}"),
            (_, false) => format!(" + {t}"),
            (_, true)  => format!(" - {t}")
        }
    }).join("")
}
