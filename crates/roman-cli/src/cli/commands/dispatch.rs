use super::super::args::*;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    tracing::debug!(format = ?cli.format, command = ?cli.cmd, "dispatching");
    let mut stdout = std::io::stdout().lock();
    match cli.cmd {
        Command::Encode(args) => super::encode::run(args, cli.format, &mut stdout),
        Command::Decode(args) => super::decode::run(args, cli.format, &mut stdout),
        Command::Validate(args) => super::validate::run(args, cli.format, &mut stdout),
    }
}
