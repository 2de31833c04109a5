use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Catalog API base URL
    /// Optional. Overrides the GREENLINE_API_URL environment variable and
    /// the built-in default.
    #[clap(short = 'u', long, help = "catalog API base URL")]
    api_url: Option<String>,

    /// Verbose mode
    /// Optional. Surfaces fetch status messages in the status bar.
    #[clap(short = 'v', long, help = "verbose status messages")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    api_url: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            api_url: args.api_url,
            verbose: args.verbose,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            api_url: args.api_url,
            verbose: args.verbose,
        }
    }

    pub fn api_url(&self) -> Option<&String> {
        self.api_url.as_ref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
