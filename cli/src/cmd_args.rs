use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Manage the medicine inventory from a terminal", long_about = None)]
struct ClapArgs {
    /// Backend base URL. Overrides MEDICINE_API_URL.
    #[clap(short = 'u', long, help = "backend base URL")]
    base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    base_url: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            base_url: args.base_url,
        }
    }

    pub fn base_url(&self) -> Option<&String> {
        self.base_url.as_ref()
    }
}
