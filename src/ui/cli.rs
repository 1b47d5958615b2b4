// Command-line interface definitions and parsing for csptgen

use crate::config::CliConfig;
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about,
    long_about = None,
    override_usage = "csptgen -js <DIR> -d <DOMAIN>\n       csptgen -urls <FILE>"
)]
pub struct Cli {
    // Extraction mode
    /// Directory of JavaScript files to scan for routes
    #[arg(long = "js", value_name = "DIR", help_heading = "Extraction Mode")]
    pub js: Option<PathBuf>,

    /// Domain prepended to every generated URL
    #[arg(short = 'd', long, value_name = "DOMAIN", help_heading = "Extraction Mode")]
    pub domain: Option<String>,

    // List mode
    /// File with one URL per line whose query values get canonicalized
    #[arg(long = "urls", value_name = "FILE", help_heading = "URL List Mode")]
    pub urls: Option<PathBuf>,

    // Output & Verbosity
    /// Directory output files are written to
    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help_heading = "Output & Verbosity"
    )]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,
}

/// What a run should do, resolved from the parsed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Canonicalize the query strings of a URL list
    UrlList { file: PathBuf },
    /// Extract routes from a source tree and build URLs on a domain
    Extract { dir: PathBuf, domain: String },
}

impl Cli {
    /// List mode wins when `-urls` is given; extraction needs both
    /// `-js` and `-d`. `None` means usage should be shown.
    pub fn mode(&self) -> Option<Mode> {
        if let Some(ref file) = self.urls {
            return Some(Mode::UrlList { file: file.clone() });
        }
        match (&self.js, &self.domain) {
            (Some(dir), Some(domain)) => Some(Mode::Extract {
                dir: dir.clone(),
                domain: domain.clone(),
            }),
            _ => None,
        }
    }
}

struct FlagSpec {
    names: &'static [&'static str],
    canonical: &'static str,
    takes_value: bool,
}

const FLAGS: &[FlagSpec] = &[
    FlagSpec {
        names: &["-js", "--js"],
        canonical: "--js",
        takes_value: true,
    },
    FlagSpec {
        names: &["-d", "--domain"],
        canonical: "--domain",
        takes_value: true,
    },
    FlagSpec {
        names: &["-urls", "--urls"],
        canonical: "--urls",
        takes_value: true,
    },
    FlagSpec {
        names: &["-o", "--output-dir"],
        canonical: "--output-dir",
        takes_value: true,
    },
    FlagSpec {
        names: &["-q", "--quiet"],
        canonical: "--quiet",
        takes_value: false,
    },
    FlagSpec {
        names: &["-v", "--verbose"],
        canonical: "--verbose",
        takes_value: false,
    },
    FlagSpec {
        names: &["-h", "--help"],
        canonical: "--help",
        takes_value: false,
    },
    FlagSpec {
        names: &["-V", "--version"],
        canonical: "--version",
        takes_value: false,
    },
];

fn lookup(name: &str) -> Option<&'static FlagSpec> {
    FLAGS.iter().find(|spec| spec.names.contains(&name))
}

/// Rewrite raw arguments into a form clap accepts.
///
/// Single-dash long flags (`-js`, `-urls`) become `--js`/`--urls`,
/// `flag=value` is split, and unknown flags, stray positionals and value
/// flags missing their value are dropped. The program name is kept.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);
    let mut normalized: Vec<String> = args.next().into_iter().collect();
    let mut pending = args.peekable();

    while let Some(arg) = pending.next() {
        let (name, inline_value) = match arg.split_once('=') {
            Some((name, value)) if name.starts_with('-') => {
                (name.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        let Some(spec) = lookup(&name) else {
            continue;
        };

        if !spec.takes_value {
            normalized.push(spec.canonical.to_string());
            continue;
        }

        let value = match inline_value {
            Some(value) => Some(value),
            None => pending.next_if(|next| lookup(next).is_none()),
        };
        if let Some(value) = value {
            normalized.push(spec.canonical.to_string());
            normalized.push(value);
        }
    }

    normalized
}

/// Convert CLI arguments to the configuration overlay
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        output_dir: cli.output_dir.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args.iter().copied()))
    }

    #[test]
    fn test_normalize_args__single_dash_long_flags() {
        let actual = normalize_args(["csptgen", "-js", "src", "-d", "https://x.com"]);

        assert_eq!(
            actual,
            vec!["csptgen", "--js", "src", "--domain", "https://x.com"]
        );
    }

    #[test]
    fn test_normalize_args__drops_unknown_flags_and_positionals() {
        let actual = normalize_args(["csptgen", "--threads", "8", "-urls", "list.txt", "-x"]);

        assert_eq!(actual, vec!["csptgen", "--urls", "list.txt"]);
    }

    #[test]
    fn test_normalize_args__inline_values() {
        let actual = normalize_args(["csptgen", "-js=src", "--domain=https://x.com/?a=b"]);

        assert_eq!(
            actual,
            vec!["csptgen", "--js", "src", "--domain", "https://x.com/?a=b"]
        );
    }

    #[test]
    fn test_normalize_args__missing_value_is_dropped() {
        assert_eq!(normalize_args(["csptgen", "-js"]), vec!["csptgen"]);
        assert_eq!(
            normalize_args(["csptgen", "-d", "-js", "src"]),
            vec!["csptgen", "--js", "src"]
        );
    }

    #[test]
    fn test_normalize_args__switches() {
        let actual = normalize_args(["csptgen", "-v", "-q", "-o", "out"]);

        assert_eq!(
            actual,
            vec!["csptgen", "--verbose", "--quiet", "--output-dir", "out"]
        );
    }

    #[test]
    fn test_mode__extraction() {
        let cli = parse(&["csptgen", "-js", "src", "-d", "https://x.com"]);

        assert_eq!(
            cli.mode(),
            Some(Mode::Extract {
                dir: PathBuf::from("src"),
                domain: "https://x.com".to_string()
            })
        );
    }

    #[test]
    fn test_mode__url_list_takes_precedence() {
        let cli = parse(&["csptgen", "-js", "src", "-d", "x", "-urls", "list.txt"]);

        assert_eq!(
            cli.mode(),
            Some(Mode::UrlList {
                file: PathBuf::from("list.txt")
            })
        );
    }

    #[test]
    fn test_mode__incomplete_arguments() {
        assert_eq!(parse(&["csptgen"]).mode(), None);
        assert_eq!(parse(&["csptgen", "-js", "src"]).mode(), None);
        assert_eq!(parse(&["csptgen", "-d", "https://x.com"]).mode(), None);
    }

    #[test]
    fn test_cli_to_config() {
        let cli = parse(&["csptgen", "-urls", "u.txt", "-o", "out", "-v"]);

        let config = cli_to_config(&cli);

        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert!(config.verbose);
        assert!(!config.quiet);
    }
}
