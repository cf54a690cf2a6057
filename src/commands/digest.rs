use crate::cli::InputArgs;
use crate::commands::input::{self, ResolvedInput};
use crate::commands::trace::check_digest;
use crate::core::compress;

pub fn main(args: InputArgs, check: bool) -> anyhow::Result<()> {
    let ResolvedInput { block, message } = input::resolve(&args)?;
    let trace = compress::compress(&block);
    println!("{}", trace.digest_hex());
    if check {
        check_digest(&trace, message.as_deref())?;
    }
    Ok(())
}
