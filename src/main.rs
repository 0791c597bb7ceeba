use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    ops::ControlFlow,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::Parser;
use reckon::{
    AngleMode, EvaluationOutcome, Event, HistoryStore, Session, evaluate,
    session::history::DEFAULT_CAPACITY,
};
use tracing_subscriber::EnvFilter;

/// reckon is a scientific calculator for the command line.
///
/// Evaluates one expression, every line of a file, or an interactive session
/// with an answer register (`ANS`) and a saved history.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Angle unit for trigonometric functions (deg or rad). Defaults to the
    /// saved mode, or deg.
    #[arg(short, long)]
    angle: Option<AngleMode>,

    /// Value of `ANS` before the first evaluation.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    ans: f64,

    /// Tells reckon to treat EXPRESSION as a file and evaluate each line.
    #[arg(short, long, requires = "expression")]
    file: bool,

    /// Reads expressions from standard input, one per line.
    #[arg(short, long, conflicts_with = "file")]
    interactive: bool,

    /// History document for interactive sessions.
    #[arg(long, env = "RECKON_HISTORY")]
    history: Option<PathBuf>,

    /// Number of history entries to keep.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    history_cap: usize,

    /// More log output on stderr (-v debug, -vv trace). `RECKON_LOG` takes
    /// precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate, or a path with --file.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

const HELP: &str = "\
commands:
  :deg, :rad      switch angle mode
  :mode           toggle angle mode
  :history        list history, newest first
  :recall N       evaluate history entry N again
  :use N          make the result of entry N the answer
  :clear-history  forget all entries
  :quit           leave";

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("RECKON_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    match (&args.expression, args.file, args.interactive) {
        (Some(path), true, _) => run_file(Path::new(path), args),
        (Some(expression), false, false) => Ok(run_once(expression, args)),
        _ => run_interactive(args),
    }
}

/// The `--angle` choice, else the saved mode, else degrees.
fn angle_mode(args: &Args) -> AngleMode {
    args.angle
        .or_else(|| args.history.as_ref().map(|path| HistoryStore::new(path).load().angle_mode))
        .unwrap_or_default()
}

fn run_once(expression: &str, args: &Args) -> ExitCode {
    match evaluate(expression, angle_mode(args), args.ans) {
        EvaluationOutcome::Success { formatted, .. } => {
            println!("{formatted}");
            ExitCode::SUCCESS
        },
        EvaluationOutcome::Error(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        },
    }
}

fn run_file(path: &Path, args: &Args) -> anyhow::Result<ExitCode> {
    let script = fs::read_to_string(path).with_context(|| {
                                             format!("failed to read the input file '{}'. Perhaps this file does not exist?",
                                                     path.display())
                                         })?;
    let angle_mode = angle_mode(args);
    let mut answer = args.ans;
    let mut failed = false;

    for (index, line) in script.lines().enumerate() {
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        match evaluate(expression, angle_mode, answer) {
            EvaluationOutcome::Success { value, formatted } => {
                println!("{expression} = {formatted}");
                answer = value;
            },
            EvaluationOutcome::Error(error) => {
                eprintln!("line {}: {expression}: Error: {error}", index + 1);
                failed = true;
            },
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn run_interactive(args: &Args) -> anyhow::Result<ExitCode> {
    let mut session = match &args.history {
        Some(path) => Session::with_store(HistoryStore::new(path), args.history_cap),
        None => Session::with_capacity(args.history_cap),
    };
    if let Some(angle) = args.angle {
        session.set_angle_mode(angle);
    }
    session.set_answer(args.ans);

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut out = io::stdout().lock();

    if let Some(expression) = &args.expression {
        evaluate_line(&mut session, expression, &mut out)?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            write!(out, "[{}] > ", session.angle_mode())?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from standard input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let flow = match line.strip_prefix(':') {
            Some(command) => run_command(&mut session, command, &mut out)?,
            None => {
                evaluate_line(&mut session, line, &mut out)?;
                ControlFlow::Continue(())
            },
        };
        if flow.is_break() {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn evaluate_line(session: &mut Session, line: &str, out: &mut impl Write) -> io::Result<()> {
    session.handle(Event::Clear);
    // Keyed in like a keypad: a leading operator on its own picks up `ANS`.
    let (head, rest) = match line.char_indices().nth(1) {
        Some((split, _)) => line.split_at(split),
        None => (line, ""),
    };
    session.handle(Event::Input(head.to_string()));
    if !rest.is_empty() {
        session.handle(Event::Input(rest.to_string()));
    }
    session.handle(Event::Equals);
    match session.error() {
        Some(error) => writeln!(out, "{}: {error}", session.display()),
        None => writeln!(out, "{}", session.display()),
    }
}

fn run_command(session: &mut Session,
               command: &str,
               out: &mut impl Write)
               -> anyhow::Result<ControlFlow<()>> {
    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let index = words.next().map(str::parse::<usize>).transpose();

    match (name, index) {
        ("q" | "quit" | "exit", _) => return Ok(ControlFlow::Break(())),
        ("deg", _) => session.set_angle_mode(AngleMode::Deg),
        ("rad", _) => session.set_angle_mode(AngleMode::Rad),
        ("mode", _) => session.handle(Event::ToggleAngleMode),
        ("history", _) => {
            for (i, entry) in session.history().iter().enumerate() {
                let result = entry.result.as_deref().unwrap_or("?");
                let timestamp = entry.timestamp.as_deref().unwrap_or_default();
                writeln!(out, "{i:>3}: {} = {result}  {timestamp}", entry.expression)?;
            }
            return Ok(ControlFlow::Continue(()));
        },
        ("recall" | "use", Ok(Some(i))) => {
            let Some(entry) = session.history().get(i).cloned() else {
                writeln!(out, "no history entry {i}")?;
                return Ok(ControlFlow::Continue(()));
            };
            if name == "recall" {
                session.handle(Event::HistorySelected(entry));
                session.handle(Event::Equals);
                writeln!(out, "{}", session.display())?;
            } else {
                session.handle(Event::HistoryResultSelected(entry));
                writeln!(out, "ANS = {}", session.expression())?;
            }
            return Ok(ControlFlow::Continue(()));
        },
        ("clear-history", _) => session.handle(Event::ClearHistory),
        _ => {
            writeln!(out, "{HELP}")?;
            return Ok(ControlFlow::Continue(()));
        },
    }

    writeln!(out, "ok ({})", session.angle_mode())?;
    Ok(ControlFlow::Continue(()))
}
