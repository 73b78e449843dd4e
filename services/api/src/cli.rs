use crate::demo::{run_demo, run_screen_report, DemoArgs, ScreenReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Resume Screening Service",
    about = "Run and demonstrate the resume screening gap analyzer from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Screen a candidate file and related operations
    Screen {
        #[command(subcommand)]
        command: ScreenCommand,
    },
    /// Run the screening pipeline over a built-in sample dataset
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ScreenCommand {
    /// Analyze a candidate file and write the screening report
    Report(ScreenReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Screen {
            command: ScreenCommand::Report(args),
        } => run_screen_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
