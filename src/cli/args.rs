use crate::cli::InvocationOptions;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::iter::{self, Peekable};

/// Program name used as `argv[0]` when handing tokens to clap
const BIN_NAME: &str = "quantumflow";

/// Command-line arguments for quantumflow
///
/// `-h`/`-V` and their long forms are not reserved: like any other unknown
/// flag they are ignored and the application still runs.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "quantumflow")]
#[command(about = "Command-line entry point for the QuantumFlow application")]
#[command(long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Input path or identifier, passed through untouched
    #[arg(short, long, value_name = "INPUT")]
    pub input: Option<String>,

    /// Output path or identifier, passed through untouched
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<String>,
}

/// Parse raw process arguments (without the executable name) into options
///
/// Never fails. Unknown flags, positionals, non-UTF-8 tokens and value
/// flags without a value are dropped by [`normalize_args`] before clap sees
/// anything, and what is left is only ever `--input=..`, `--output=..` and
/// `--verbose`, which this `Args` always accepts. The default options on a
/// clap error are therefore never observed.
pub fn parse_options<I, T>(raw: I) -> InvocationOptions
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens = iter::once(BIN_NAME.to_owned()).chain(normalize_args(raw));

    Args::try_parse_from(tokens)
        .map(InvocationOptions::from)
        .unwrap_or_default()
}

/// Rewrite raw tokens into a form clap accepts without complaint
///
/// Known value flags are emitted as `--name=value`, the verbose switch is
/// folded into a single trailing `--verbose` and everything else is dropped.
/// An unknown long flag without `=` swallows the next token when that token
/// is not itself a flag. `--` stops flag parsing.
///
/// Values of `-i`/`-o` that are not valid UTF-8 are converted lossily; any
/// other non-UTF-8 token is ignored.
pub fn normalize_args<I, T>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = raw.into_iter().map(Into::into).peekable();
    let mut verbose = false;
    let mut kept = Vec::new();

    while let Some(raw_token) = tokens.next() {
        let Some(token) = raw_token.to_str() else {
            continue;
        };

        if token == "--" {
            break;
        }

        if let Some(flag) = token.strip_prefix("--") {
            let (name, inline) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value.to_owned())),
                None => (flag, None),
            };

            match name {
                "verbose" => verbose = inline.as_deref() != Some("false"),
                "no-verbose" => verbose = false,
                "input" | "output" => {
                    if let Some(value) = inline.or_else(|| take_value(&mut tokens)) {
                        kept.push(format!("--{name}={value}"));
                    }
                }
                _ => {
                    if inline.is_none() {
                        let _skipped = take_value(&mut tokens);
                    }
                }
            }
        } else if let Some(cluster) = token.strip_prefix('-').filter(|c| !c.is_empty()) {
            for (index, letter) in cluster.char_indices() {
                match letter {
                    'v' => verbose = true,
                    'i' | 'o' => {
                        let rest = &cluster[index + letter.len_utf8()..];
                        let rest = rest.strip_prefix('=').unwrap_or(rest);
                        let value = if rest.is_empty() {
                            take_value(&mut tokens)
                        } else {
                            Some(rest.to_owned())
                        };
                        if let Some(value) = value {
                            let name = if letter == 'i' { "input" } else { "output" };
                            kept.push(format!("--{name}={value}"));
                        }
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    if verbose {
        kept.push("--verbose".to_owned());
    }

    kept
}

/// Take the next token as a flag value unless it looks like another flag
fn take_value<I>(tokens: &mut Peekable<I>) -> Option<String>
where
    I: Iterator<Item = OsString>,
{
    tokens
        .next_if(|next| is_value(next))
        .map(|value| value.to_string_lossy().into_owned())
}

fn is_value(token: &OsStr) -> bool {
    let bytes = token.as_encoded_bytes();
    bytes == b"-" || !bytes.starts_with(b"-")
}
