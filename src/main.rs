use anyhow::Context;
use termcal::app::App;
use termcal::core::cli::CliArgs;
use termcal::core::context::AppContext;
use termcal::logging::LogTarget;
use termcal::ui::output::StdoutHandle;

fn main() {
    let args = match CliArgs::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = match AppContext::new_with_paths(
        args.paths.config_path.clone(),
        args.paths.logs_dir.clone(),
    )
    .with_context(|| format!("loading {}", args.paths.config_path.display()))
    {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    };

    let logger = ctx.logger.clone();
    let mut app = App::new(ctx, StdoutHandle);
    let result = app
        .run(&args.command)
        .with_context(|| format!("'{}' failed", args.command.name()));

    if let Err(err) = result {
        logger.error(format!("{err:#}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
