// src/config.rs
use blog_stats_infra::json::BlogInput;

use crate::args::Args;
use crate::options::OutputFormat;

/// Immutable runtime configuration, built once from parsed arguments
/// and passed explicitly to whoever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: BlogInput,
    pub format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let input = match args.input {
            Some(path) if path.as_os_str() != "-" => BlogInput::File(path),
            _ => BlogInput::Stdin,
        };
        Self { input, format: args.format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_path_reads_stdin() {
        let config = Config::from(Args { input: None, format: OutputFormat::Table });
        assert_eq!(config.input, BlogInput::Stdin);
    }

    #[test]
    fn dash_reads_stdin() {
        let config = Config::from(Args { input: Some("-".into()), format: OutputFormat::Json });
        assert_eq!(config.input, BlogInput::Stdin);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn path_reads_file() {
        let config = Config::from(Args { input: Some("blogs.json".into()), format: OutputFormat::Table });
        assert_eq!(config.input, BlogInput::File("blogs.json".into()));
    }
}
