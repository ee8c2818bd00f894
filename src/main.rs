use std::ffi::OsString;
use std::io::stdout;

use anyhow::Result;
use bpaf::{any, construct, OptionParser, Parser};
use tracing::Level;

use declarations::declarations::{run, write_transcript};

#[derive(Debug)]
struct Opts {
    // every token, flags included, is swallowed and never inspected
    _args: Vec<OsString>,
}

fn opts() -> OptionParser<Opts> {
    let _args = any::<OsString, _, _>("ARGS", Some).many();
    construct!(Opts { _args }).to_options()
}

fn main() -> Result<()> {
    let _opts = opts().run();
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let lines = run();
    write_transcript(&mut stdout().lock(), lines.as_slice())?;
    Ok(())
}
