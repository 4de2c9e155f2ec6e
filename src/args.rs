use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-audit")]
#[command(about = "On-page SEO audit of a site, driven by its sitemap")]
#[command(version)]
pub struct Args {
    /// Domain or URL to audit (https:// is assumed when no scheme is given)
    pub domain: String,

    /// Maximum number of pages to audit
    #[arg(short, long)]
    pub max_pages: Option<usize>,

    /// Delay between page audits in milliseconds
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    /// JSON configuration file; flags given on the command line take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the per-page CSV table
    #[arg(short, long, default_value = "enhanced_seo_audit.csv")]
    pub output: PathBuf,

    /// Also write the pages and site report as JSON
    #[arg(long)]
    pub report_json: Option<PathBuf>,

    /// Page shown in the detailed report (defaults to the first audited page)
    #[arg(long)]
    pub page: Option<String>,
}
