mod config;
mod error;
mod logging;
mod menu;

use std::{
    fs,
    io::{self, IsTerminal, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use enclose_core::{
    Balance, Config, MarkerStyle, check, render,
    sequence::{self, Method},
    text::reverse,
};
use owo_colors::OwoColorize;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{error::Error, menu::Menu};

/// Check text for balanced brackets
#[derive(Parser, Debug)]
#[command(name = "enclose", version, about)]
struct Args {
    /// Config file (defaults to ./enclose.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check files or stdin for balanced (), [] and {}
    Check(CheckArgs),

    /// Reverse a piece of text
    Reverse {
        /// Text to reverse (reads from stdin if not provided)
        text: Option<String>,
    },

    /// Print the n-th number of a sequence
    Sequence {
        /// Which sequence
        #[arg(value_enum)]
        kind: SequenceKind,

        /// Index into the sequence
        n: u64,

        /// How to compute it
        #[arg(long, value_enum, default_value_t = Method::Iterative)]
        method: Method,
    },

    /// Browse the exercises in an interactive menu
    Menu,
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    /// Files or glob patterns to check (reads from stdin if none provided)
    #[arg()]
    files: Vec<String>,

    /// Read from stdin
    #[arg(long)]
    stdin: bool,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    quiet: bool,

    /// Marker style, overriding the config file
    #[arg(long, value_enum)]
    markers: Option<MarkerStyle>,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SequenceKind {
    Even,
    Fibonacci,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2_u8)
        }
    }
}

fn run(args: Args) -> Result<ExitCode, Error> {
    match args.command {
        Command::Check(check_args) => {
            let mut config = config::load(args.config.as_deref())?;
            if let Some(markers) = check_args.markers {
                config.marker_style = markers;
            }
            let verdict = check_inputs(
                &check_args,
                &config,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            Ok(verdict.into())
        }
        Command::Reverse { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            println!("{}", reverse(text.trim_end_matches(['\n', '\r'])));
            Ok(ExitCode::SUCCESS)
        }
        Command::Sequence { kind, n, method } => {
            let value = match kind {
                SequenceKind::Even => sequence::even(n, method)?,
                SequenceKind::Fibonacci => sequence::fibonacci(n, method)?,
            };
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Menu => {
            let config = config::load(args.config.as_deref())?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(stdin.lock(), stdout.lock(), config).run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Overall result of a `check` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// Every input was read and is balanced.
    Balanced,
    /// Every input was read and at least one is unbalanced.
    Unbalanced,
    /// At least one input could not be read.
    Failed,
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Balanced => Self::SUCCESS,
            Verdict::Unbalanced => Self::from(1_u8),
            Verdict::Failed => Self::from(2_u8),
        }
    }
}

/// One checked input.
#[derive(Debug)]
struct Checked {
    name: String,
    source: String,
    balance: Balance,
}

/// Check every input, writing reports to `out` and read failures to `err`.
///
/// A file that cannot be read does not stop the others; reports come out in
/// argument order.
fn check_inputs<O: Write, E: Write>(
    args: &CheckArgs,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> Result<Verdict, Error> {
    let paint = Paint(args.color.enabled());

    let results = if args.stdin || args.files.is_empty() {
        vec![check_stdin()]
    } else {
        let paths = expand_patterns(&args.files)?;
        info!(files = paths.len(), "checking files");
        paths
            .par_iter()
            .map(|path| check_file(path))
            .collect::<Vec<_>>()
    };

    let mut any_unbalanced = false;
    let mut any_error = false;
    for result in &results {
        match result {
            Ok(Checked {
                name,
                source,
                balance,
            }) => {
                if !balance.is_balanced() {
                    any_unbalanced = true;
                }
                if !args.quiet {
                    writeln!(out, "{}", describe(name, source, balance, config, paint))?;
                }
            }
            Err(e) => {
                any_error = true;
                writeln!(err, "{e}")?;
            }
        }
    }

    if any_error {
        return Ok(Verdict::Failed);
    }
    if any_unbalanced {
        return Ok(Verdict::Unbalanced);
    }
    Ok(Verdict::Balanced)
}

fn check_stdin() -> Result<Checked, Error> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| Error::Read {
            path: PathBuf::from("<stdin>"),
            source: e,
        })?;
    let balance = check(&source);
    Ok(Checked {
        name: "<stdin>".to_string(),
        source,
        balance,
    })
}

fn check_file(path: &Path) -> Result<Checked, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let balance = check(&source);
    debug!(path = %path.display(), ?balance, "checked");
    Ok(Checked {
        name: path.display().to_string(),
        source,
        balance,
    })
}

fn read_stdin() -> Result<String, Error> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

/// Expand glob patterns; plain paths are passed through untouched.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let matches = glob::glob(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        let before = paths.len();
        for entry in matches {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }
        if paths.len() == before {
            return Err(Error::NoMatch(pattern.clone()));
        }
    }
    Ok(paths)
}

/// Output line(s) for one checked input.
fn describe(name: &str, source: &str, balance: &Balance, config: &Config, paint: Paint) -> String {
    if balance.is_balanced() {
        return format!("{}: {}", paint.bold(name), paint.ok("balanced"));
    }

    let report = render(source, balance, config);
    let (head, rest) = report.split_once('\n').unwrap_or((report.as_str(), ""));
    if rest.is_empty() {
        format!("{}:{}", paint.bold(name), paint.bad(head))
    } else {
        format!("{}:{}\n{rest}", paint.bold(name), paint.bad(head))
    }
}

/// Optional colouring for terminal output.
#[derive(Clone, Copy, Debug)]
struct Paint(bool);

impl Paint {
    fn ok(self, text: &str) -> String {
        if self.0 {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn bad(self, text: &str) -> String {
        if self.0 {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(self, text: &str) -> String {
        if self.0 {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["enclose", "-vv", "check", "a.txt", "--markers", "numbered"])
            .unwrap();
        assert_eq!(args.verbose, 2);
        let Command::Check(check_args) = args.command else {
            panic!("expected check");
        };
        assert_eq!(check_args.files, vec!["a.txt"]);
        assert_eq!(check_args.markers, Some(MarkerStyle::Numbered));
        assert_eq!(check_args.color, ColorChoice::Auto);
    }

    #[test]
    fn test_sequence_args_parse() {
        let args =
            Args::try_parse_from(["enclose", "sequence", "fibonacci", "10", "--method", "recursive"])
                .unwrap();
        assert!(matches!(
            args.command,
            Command::Sequence {
                kind: SequenceKind::Fibonacci,
                n: 10,
                method: Method::Recursive,
            }
        ));
    }

    #[test]
    fn test_only_check_and_menu_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_file(dir.path(), "broken.toml", "tab_width = \n");
        let config = config.to_str().unwrap();

        for command in [
            &["sequence", "even", "3"][..],
            &["sequence", "fibonacci", "5", "--method", "recursive"],
            &["reverse", "abc"],
        ] {
            let prefix = ["enclose", "--config", config];
            let argv = prefix.iter().chain(command);
            let args = Args::try_parse_from(argv).unwrap();
            assert!(run(args).is_ok(), "{command:?}");
        }

        let args = Args::try_parse_from(["enclose", "--config", config, "check", "--quiet", config])
            .unwrap();
        assert!(matches!(run(args), Err(Error::ConfigSyntax { .. })));
    }

    #[test]
    fn test_check_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "bad.txt", "call(x]\n");
        let checked = check_file(&path).unwrap();
        assert_eq!(
            checked.balance,
            Balance::Mismatch {
                opener_position: 4,
                closer_position: 6,
            }
        );
        assert_eq!(checked.name, path.display().to_string());
    }

    #[test]
    fn test_check_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = check_file(&path).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().starts_with(&path.display().to_string()), "{err}");
    }

    #[test]
    fn test_expand_patterns() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.txt", "()");
        write_file(dir.path(), "b.txt", "[]");
        write_file(dir.path(), "c.md", "{}");

        let pattern = dir.path().join("*.txt").display().to_string();
        let plain = dir.path().join("c.md").display().to_string();
        let paths = expand_patterns(&[pattern, plain]).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.md"]);
    }

    #[test]
    fn test_expand_patterns_without_matches() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("*.none").display().to_string();
        let err = expand_patterns(&[pattern]).unwrap_err();
        assert!(matches!(err, Error::NoMatch(_)));
    }

    #[test]
    fn test_describe_prefixes_report_with_name() {
        let config = Config::default();
        let source = "a)";
        let text = describe("f.txt", source, &check(source), &config, Paint(false));
        assert!(text.starts_with("f.txt:1:2: closer `)` has no matching opener\n"), "{text}");
        assert_eq!(
            describe("g.txt", "()", &Balance::Balanced, &config, Paint(false)),
            "g.txt: balanced"
        );
    }

    #[test]
    fn test_describe_without_source_lines() {
        let config = Config {
            show_source: false,
            ..Default::default()
        };
        let text = describe("f.txt", "(", &check("("), &config, Paint(false));
        assert_eq!(text, "f.txt:1:1: opener `(` is never closed\n  = help: add `)` after it");
    }

    fn check_args(files: &[&PathBuf], quiet: bool) -> CheckArgs {
        CheckArgs {
            files: files.iter().map(|p| p.display().to_string()).collect(),
            stdin: false,
            quiet,
            markers: None,
            color: ColorChoice::Never,
        }
    }

    fn run_check(args: &CheckArgs) -> (Verdict, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let verdict = check_inputs(args, &Config::default(), &mut out, &mut err).unwrap();
        (
            verdict,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_check_inputs_all_balanced() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "(a [b] {c})");
        let b = write_file(dir.path(), "b.txt", "no brackets");
        let (verdict, out, err) = run_check(&check_args(&[&a, &b], false));
        assert_eq!(verdict, Verdict::Balanced);
        assert_eq!(out.matches(": balanced\n").count(), 2, "{out}");
        assert!(err.is_empty());
    }

    #[test]
    fn test_check_inputs_unbalanced_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "()");
        let b = write_file(dir.path(), "b.txt", "(]");
        let (verdict, out, _) = run_check(&check_args(&[&a, &b], false));
        assert_eq!(verdict, Verdict::Unbalanced);
        assert!(
            out.contains(&format!("{}:1:2: closer `]`", b.display())),
            "{out}"
        );
    }

    #[test]
    fn test_check_inputs_unreadable_file_keeps_other_reports() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "(");
        let b = dir.path().join("b.txt");
        fs::write(&b, [0xff, 0xfe]).unwrap();
        let pattern = dir.path().join("*.txt").display().to_string();
        let args = CheckArgs {
            files: vec![pattern],
            ..check_args(&[], false)
        };

        let (verdict, out, err) = run_check(&args);
        assert_eq!(verdict, Verdict::Failed);
        assert!(
            out.contains(&format!("{}:1:1: opener `(` is never closed", a.display())),
            "{out}"
        );
        assert!(err.starts_with(&format!("{}: ", b.display())), "{err}");
    }

    #[test]
    fn test_check_inputs_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "()");
        let missing = dir.path().join("missing.txt");
        let (verdict, out, err) = run_check(&check_args(&[&missing, &a], false));
        assert_eq!(verdict, Verdict::Failed);
        assert!(out.contains(": balanced"), "{out}");
        assert!(err.contains("missing.txt: "), "{err}");
    }

    #[test]
    fn test_check_inputs_keeps_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let names = ["z.txt", "a.txt", "m.txt", "b.txt", "y.txt"];
        let paths: Vec<PathBuf> = names
            .iter()
            .map(|name| write_file(dir.path(), name, "{}"))
            .collect();
        let refs: Vec<&PathBuf> = paths.iter().collect();

        let (_, out, _) = run_check(&check_args(&refs, false));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), names.len());
        for (line, path) in lines.iter().zip(&paths) {
            assert_eq!(*line, format!("{}: balanced", path.display()));
        }
    }

    #[test]
    fn test_check_inputs_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", ")");
        let (verdict, out, _) = run_check(&check_args(&[&a], true));
        assert_eq!(verdict, Verdict::Unbalanced);
        assert!(out.is_empty(), "{out}");
    }

    #[test]
    fn test_verdict_exit_codes() {
        let code = |code: ExitCode| format!("{code:?}");
        assert_eq!(code(Verdict::Balanced.into()), code(ExitCode::SUCCESS));
        assert_eq!(code(Verdict::Unbalanced.into()), code(ExitCode::from(1_u8)));
        assert_eq!(code(Verdict::Failed.into()), code(ExitCode::from(2_u8)));
    }

    #[test]
    fn test_paint_adds_escapes_only_when_enabled() {
        assert_eq!(Paint(false).ok("x"), "x");
        assert!(Paint(true).ok("x").contains("\u{1b}["));
        assert!(Paint(true).bad("x").contains("\u{1b}["));
    }
}
