use crate::cli::InputArgs;
use crate::commands::input::{self, ResolvedInput};
use crate::core::compress;
use crate::report;

pub fn main(args: InputArgs) -> anyhow::Result<()> {
    let ResolvedInput { block, .. } = input::resolve(&args)?;
    let schedule = compress::expand_schedule(&block);
    report::print_schedule(&schedule);
    Ok(())
}
