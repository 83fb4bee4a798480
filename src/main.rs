use std::process::ExitCode;

use blog_stats::args::Args;
use blog_stats::config::Config;
use blog_stats::error::Result;
use blog_stats::presentation;
use blog_stats_infra::JsonBlogSource;
use blog_stats_usecase::AnalyzeBlogs;
use clap::Parser;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from(args);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let source = JsonBlogSource::new(config.input.clone());
    let usecase = AnalyzeBlogs::new(&source);
    let report = usecase.run()?;
    presentation::print_report(&report, config)
}
