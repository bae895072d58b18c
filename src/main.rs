use std::process::ExitCode;

/// Environment variable holding the log filter, for example `GOTO_LOG=debug`.
const LOG_ENV_VAR: &str = "GOTO_LOG";

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, "warn"))
        .target(env_logger::Target::Stderr)
        .init();
    gt_cli::run()
}
