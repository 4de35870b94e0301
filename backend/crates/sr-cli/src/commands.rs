use sr_core::CodeSpace;

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// List registered outcomes and their codes
    List {
        /// Only list codes from one code space
        #[arg(long, value_enum)]
        space: Option<SpaceArg>,
    },

    /// Look up the code for an outcome name (e.g. "Not Found")
    Lookup {
        /// Outcome name, matched exactly
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpaceArg {
    /// HTTP response status codes
    Standard,
    /// Custom WebSocket close codes
    Private,
}

impl From<SpaceArg> for CodeSpace {
    fn from(arg: SpaceArg) -> Self {
        match arg {
            SpaceArg::Standard => CodeSpace::Standard,
            SpaceArg::Private => CodeSpace::PrivateClose,
        }
    }
}
