use clap::Parser;
use env_logger::Env;
use seo_audit::{Audit, export, render};
use std::process::ExitCode;
use std::time::Duration;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut audit = Audit::new(&args.domain);
    if let Some(path) = &args.config {
        audit = match audit.with_config_file(path) {
            Ok(audit) => audit,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        };
    }
    if let Some(max_pages) = args.max_pages {
        audit = audit.with_max_pages(max_pages);
    }
    if let Some(delay_ms) = args.delay_ms {
        audit = audit.with_request_delay(Duration::from_millis(delay_ms));
    }

    let start_time = std::time::Instant::now();
    let outcome = match audit.run().await {
        Ok(outcome) => outcome,
        Err(e) => {
            ::log::error!("Error running audit: {}", e);
            return ExitCode::FAILURE;
        }
    };
    ::log::info!(
        "Audited {} pages in {:.2} seconds",
        outcome.records.len(),
        start_time.elapsed().as_secs_f64()
    );

    print!("{}", render::summary(&outcome.report));

    if outcome.records.is_empty() {
        return ExitCode::SUCCESS;
    }

    if let Err(e) = export::save_csv(&args.output, &outcome.records) {
        ::log::error!("Failed to write {}: {}", args.output.display(), e);
        return ExitCode::FAILURE;
    }
    println!("\nResults saved to {}", args.output.display());

    if let Some(path) = &args.report_json {
        if let Err(e) = export::save_json(path, &outcome.records, &outcome.report) {
            ::log::error!("Failed to write {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        println!("Report saved to {}", path.display());
    }

    let page = args
        .page
        .as_deref()
        .or_else(|| render::first_valid_url(&outcome.records));
    if let Some(url) = page {
        print!("{}", render::page_detail(&outcome.records, url));
    }

    ExitCode::SUCCESS
}
