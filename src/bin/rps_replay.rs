//! Play a game against a recorded landmark stream.
//!
//! Controls are read from stdin, one per line:
//! `s` start over, `p` pause/resume, `?` show the score, `q` quit.

use clap::Parser;
use gesture_rps::config::GameConfig;
use gesture_rps::error::GameError;
use gesture_rps::game::ScoreSummary;
use gesture_rps::shell::{
    self, spawn_control_reader, Control, JsonPresenter, Presenter, ReplayFrame, ReplaySource,
    RunOptions, Session, TerminalPresenter,
};
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(name = "rps-replay", about = "Rock-paper-scissors against recorded hand landmarks")]
struct Args {
    /// JSON-lines landmark recording
    #[arg(short, long)]
    landmarks: PathBuf,

    /// JSON game configuration; defaults apply to missing fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep the session open after the last round
    #[arg(long)]
    keep_open: bool,

    /// Print game snapshots as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match play(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("rps-replay: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn play(args: Args) -> Result<(), GameError> {
    let config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    let source = ReplaySource::open(&args.landmarks)?;
    let options = RunOptions {
        exit_on_finish: !args.keep_open,
    };

    let summary = if args.json {
        let presenter = JsonPresenter::new(std::io::stdout());
        drive(Session::new(config, source, presenter), options).await
    } else {
        let presenter = TerminalPresenter::new(std::io::stdout());
        drive(Session::new(config, source, presenter), options).await
    };
    log::info!(
        "final score: you {} computer {} ties {}",
        summary.user,
        summary.computer,
        summary.ties
    );
    Ok(())
}

async fn drive<P>(mut session: Session<ReplaySource, P>, options: RunOptions) -> ScoreSummary
where
    P: Presenter<ReplayFrame>,
{
    let (tx, rx) = mpsc::unbounded_channel();
    // Left blocked on stdin when the game ends; it goes away with the process.
    spawn_control_reader(BufReader::new(std::io::stdin()), tx.clone());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(Control::Quit);
        }
    });

    session.start();
    shell::run(&mut session, rx, options).await
}
