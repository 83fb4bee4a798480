// src/presentation.rs
use blog_stats_usecase::BlogReport;

use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;

pub fn print_report(report: &BlogReport, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => print_table(report),
        OutputFormat::Csv => print_csv(report),
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Yaml => print_yaml(report)?,
    }
    Ok(())
}

fn print_table(report: &BlogReport) {
    // Version header
    println!("blog_stats v{}", crate::VERSION);
    println!();

    println!("    BLOGS       TOTAL LIKES");
    println!("{:>9}{:>18}", report.blogs, report.total_likes);
    println!("---");

    match &report.favorite_blog {
        Some(favorite) => println!(
            "Favorite blog:  {} by {} ({} likes)",
            favorite.title, favorite.author, favorite.likes
        ),
        None => println!("Favorite blog:  (none)"),
    }
    match &report.most_blogs {
        Some(top) => println!("Most blogs:     {} ({} posts)", top.author, top.blogs),
        None => println!("Most blogs:     (none)"),
    }
    match &report.most_likes {
        Some(top) => println!("Most likes:     {} ({} likes)", top.author, top.likes),
        None => println!("Most likes:     (none)"),
    }
}

fn print_json(report: &BlogReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_yaml(report: &BlogReport) -> Result<()> {
    print!("{}", serde_yaml::to_string(report)?);
    Ok(())
}

fn print_csv(report: &BlogReport) {
    println!("metric,value,title,author");
    println!("blogs,{},,", report.blogs);
    println!("total_likes,{},,", report.total_likes);

    match &report.favorite_blog {
        Some(favorite) => println!(
            "favorite_blog,{},{},{}",
            favorite.likes,
            csv_field(&favorite.title),
            csv_field(&favorite.author)
        ),
        None => println!("favorite_blog,,,"),
    }
    match &report.most_blogs {
        Some(top) => println!("most_blogs,{},,{}", top.blogs, csv_field(&top.author)),
        None => println!("most_blogs,,,"),
    }
    match &report.most_likes {
        Some(top) => println!("most_likes,{},,{}", top.likes, csv_field(&top.author)),
        None => println!("most_likes,,,"),
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
