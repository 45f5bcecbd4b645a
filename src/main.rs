use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use elemental_words::config::configuration::YamlConfig;
use elemental_words::format::render_forms;
use elemental_words::{ElementalCalculator, Result};
use log::info;

const USAGE: &str = "usage: elemental [--config <path.yml>]";

enum Command {
    Run(Option<PathBuf>),
    Help,
}

fn main() {
    env_logger::init();
    let config = match parse_args(env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => print_help(),
        Err(msg) => {
            eprintln!("elemental: {}\n{}", msg, USAGE);
            process::exit(2);
        }
    };
    if let Err(e) = run(config) {
        eprintln!("elemental: {}", e);
        process::exit(1);
    }
}

fn run(config: Option<PathBuf>) -> Result<()> {
    let calculator = match config {
        Some(path) => {
            info!("using config {}", path.display());
            ElementalCalculator::with_config(&YamlConfig::from_path(&path)?)?
        }
        None => ElementalCalculator::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Elemental Words!")?;
    writeln!(out, "Enter a word:")?;
    out.flush()?;

    let word = read_word(io::stdin().lock())?;
    let forms = calculator.elemental_forms(word.as_deref());

    writeln!(out, "Possible combinations of element symbols:")?;
    writeln!(out, "{}", render_forms(&forms))?;
    Ok(())
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> std::result::Result<Command, String> {
    let mut config = None;
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--config" => match args.next() {
                Some(p) => config = Some(PathBuf::from(p)),
                None => return Err("--config needs a path".to_string()),
            },
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unknown argument {:?}", other)),
        }
    }
    Ok(Command::Run(config))
}

fn print_help() -> ! {
    println!("{}\nreads one word from stdin and prints every way to spell it with element symbols", USAGE);
    process::exit(0);
}

// one line without its terminator; None at end of input
fn read_word<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn parse_args_config() {
        match parse_args(args(&["--config", "elemental.yml"])) {
            Ok(Command::Run(Some(path))) => assert_eq!(PathBuf::from("elemental.yml"), path),
            _ => panic!("expected a config path"),
        }
        assert!(matches!(parse_args(args(&[])), Ok(Command::Run(None))));
        assert!(matches!(parse_args(args(&["-h"])), Ok(Command::Help)));
    }

    #[test]
    fn parse_args_rejects_missing_path() {
        assert_eq!(
            Some("--config needs a path".to_string()),
            parse_args(args(&["--config"])).err()
        );
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn read_word_keeps_spaces() {
        assert_eq!(Some(" Snack ".to_string()), read_word(" Snack \r\n".as_bytes()).unwrap());
        assert_eq!(Some("beach".to_string()), read_word("beach".as_bytes()).unwrap());
        assert_eq!(Some(String::new()), read_word("\n".as_bytes()).unwrap());
        assert_eq!(None, read_word("".as_bytes()).unwrap());
    }
}
