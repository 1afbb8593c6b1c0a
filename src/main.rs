use anyhow::Result;
use is_terminal::IsTerminal;
use setop::operations::calculate;
use std::io;

fn main() -> Result<()> {
    let args = setop::args::parsed()?;

    if io::stdout().is_terminal() {
        calculate(args.op, &args.first, &args.second, io::stdout().lock())?;
    } else {
        calculate(args.op, &args.first, &args.second, io::BufWriter::new(io::stdout().lock()))?;
    }
    Ok(())
}
