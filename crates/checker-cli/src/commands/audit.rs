use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

use checker_canvas::CanvasClient;
use checker_config::{CheckerConfig, SubAccount};
use checker_core::CourseAuditRow;
use checker_report::columns::{COLUMNS, plain_cells};
use checker_report::{Auditor, html, xlsx};

use crate::cli::{AuditArgs, GlobalFlags, OutputFormat};
use crate::output::{output, output_rows};
use crate::progress::AuditProgress;

#[derive(Debug, Serialize)]
struct AuditResponse<'a> {
    sub_account: &'a SubAccount,
    generated_at: DateTime<Utc>,
    audited: usize,
    passing: usize,
    html: Option<&'a Path>,
    xlsx: Option<&'a Path>,
    courses: &'a [CourseAuditRow],
}

/// Report files requested on the command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct ReportPaths {
    html: Option<PathBuf>,
    xlsx: Option<PathBuf>,
}

pub async fn handle(
    args: &AuditArgs,
    config: &CheckerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sub_account = config.sub_accounts.resolve(&args.sub_account)?;
    config
        .canvas
        .validate()
        .context("canvas configuration is incomplete")?;

    let canvas = CanvasClient::new(&config.canvas).context("failed to build Canvas client")?;
    let auditor = Auditor::new(&canvas, config).with_style_match(args.style_match.into());

    tracing::info!(sub_account = %sub_account.name, id = sub_account.id, "auditing sub-account");
    let mut progress = AuditProgress::discovering(&sub_account.name);
    let courses = match auditor.discover(sub_account.id).await {
        Ok(courses) => courses,
        Err(error) => {
            progress.discovery_failed();
            return Err(error).with_context(|| {
                format!(
                    "failed to list courses of sub-account '{}' ({})",
                    sub_account.name, sub_account.id
                )
            });
        }
    };
    tracing::info!(courses = courses.len(), "courses selected for audit");

    progress.start_courses(courses.len());
    let rows = auditor
        .audit_courses(&courses, |row| progress.course_done(row))
        .await;
    progress.finish();

    let generated_at = Utc::now();
    let paths = report_paths(args, &sub_account);
    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }
    if let Some(path) = &paths.html {
        html::write_html(path, &sub_account.name, &rows, generated_at)
            .with_context(|| format!("failed to write HTML report {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote HTML report");
    }
    if let Some(path) = &paths.xlsx {
        xlsx::write_xlsx(path, &rows)
            .with_context(|| format!("failed to write spreadsheet {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote spreadsheet");
    }

    let passing = rows.iter().filter(|row| row.passed_all()).count();
    match flags.format {
        OutputFormat::Table => {
            let headers: Vec<&str> = COLUMNS.iter().map(|column| column.header).collect();
            let cells: Vec<Vec<String>> = rows.iter().map(|row| plain_cells(row).to_vec()).collect();
            output_rows(&headers, &cells);
            if !flags.quiet {
                eprintln!("{} courses audited, {passing} passing every check", rows.len());
                for path in paths.html.iter().chain(&paths.xlsx) {
                    eprintln!("wrote {}", path.display());
                }
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(
            &AuditResponse {
                sub_account: &sub_account,
                generated_at,
                audited: rows.len(),
                passing,
                html: paths.html.as_deref(),
                xlsx: paths.xlsx.as_deref(),
                courses: &rows,
            },
            flags.format,
        ),
    }
}

/// Explicit paths win; `--out-dir` fills in the rest from the sub-account name.
fn report_paths(args: &AuditArgs, sub_account: &SubAccount) -> ReportPaths {
    let in_out_dir = |extension: &str| {
        args.out_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.{extension}", file_stem(&sub_account.name))))
    };

    ReportPaths {
        html: args.html.clone().or_else(|| in_out_dir("html")),
        xlsx: args.xlsx.clone().or_else(|| in_out_dir("xlsx")),
    }
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}
