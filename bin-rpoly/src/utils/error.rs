use derive_more::Display;
use rpoly::PolyError;

#[derive(Debug, Display)]
pub enum CliError { 
    #[display("cannot parse '{input}' as a term list: {source}")]
    Parse { input: String, source: serde_json::Error },

    #[display("invalid polynomial: {_0}")]
    Poly(PolyError),

    #[display("cannot read {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[display("cannot serialize result: {_0}")]
    Json(serde_json::Error),

    #[display("panic: {_0}")]
    Panic(String)
}

impl CliError { 
    // 2 for rejected user input, 1 for everything else.
    pub fn exit_code(&self) -> i32 { 
        match self { 
            CliError::Parse { .. } | CliError::Poly(_) => 2,
            _ => 1
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self { 
            CliError::Parse { source, .. } => Some(source),
            CliError::Poly(e) => Some(e),
            CliError::Io { source, .. } => Some(source),
            CliError::Json(e) => Some(e),
            CliError::Panic(_) => None
        }
    }
}

impl From<PolyError> for CliError {
    fn from(e: PolyError) -> Self {
        CliError::Poly(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}
