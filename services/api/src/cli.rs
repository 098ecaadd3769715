use crate::report::{run_catalog, run_report, run_score, ReportArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hse_survey::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HSE Survey",
    about = "Collect and score HSE psychosocial risk questionnaires",
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
    /// Print the questionnaire: dimensions, questions, options and sectors
    Catalog,
    /// Score a single answer set given on the command line
    Score(ScoreArgs),
    /// Build the organization dashboard from a submission CSV export
    Report(ReportArgs),
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
        Command::Catalog => {
            run_catalog();
            Ok(())
        }
        Command::Score(args) => run_score(args),
        Command::Report(args) => run_report(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hse_survey::survey::AnswerOption;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["hse-survey"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_collects_repeated_answers() {
        let cli = Cli::try_parse_from([
            "hse-survey",
            "score",
            "--answer",
            "1=nunca",
            "--answer",
            "9=sempre",
        ])
        .expect("parse");
        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(
                    args.answers,
                    vec![(1, AnswerOption::Never), (9, AnswerOption::Always)]
                );
                assert!(!args.json);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn malformed_answer_is_rejected() {
        assert!(Cli::try_parse_from(["hse-survey", "score", "--answer", "1:nunca"]).is_err());
        assert!(Cli::try_parse_from(["hse-survey", "score", "--answer", "99=nunca"]).is_err());
    }

    #[test]
    fn report_requires_a_csv_path() {
        assert!(Cli::try_parse_from(["hse-survey", "report"]).is_err());
        let cli = Cli::try_parse_from([
            "hse-survey",
            "report",
            "--csv",
            "respostas.csv",
            "--sector",
            "Tecnologia (TI)",
            "--list-submissions",
        ])
        .expect("parse");
        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.sector.as_deref(), Some("Tecnologia (TI)"));
                assert!(args.list_submissions);
                assert!(args.export.is_none());
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }
}
