use crate::{
    action::Action,
    client::ControlPlaneClient,
    config::Config,
    evaluate,
    ledger::{Ledger, SUITE_LEDGER_COLUMNS, TASK_LEDGER_COLUMNS},
    report::{self, SuiteEntry, TaskReport},
    task::{SuiteSpec, TaskSpec},
    util::now_rfc3339,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct TaskJobOutput {
    pub report: TaskReport,
    pub report_path: PathBuf,
}

#[derive(Debug)]
pub struct SuiteJobOutput {
    pub entries: Vec<SuiteEntry>,
    pub report_path: PathBuf,
}

/// One task lifecycle: create run, submit the single navigate action, fetch
/// the summary, judge it against the criteria list. Any control-plane error
/// propagates and aborts the invocation; no partial report is assembled.
pub fn execute_task(
    client: &ControlPlaneClient,
    cfg: &Config,
    driver: &str,
    task: &TaskSpec,
) -> Result<TaskReport> {
    let run_id = client
        .create_run(driver)
        .with_context(|| format!("create run for task {}", task.id))?;
    info!("run {run_id} created driver={driver} task={}", task.id);

    let action = Action::navigate(
        &run_id,
        &cfg.harness.agent_name,
        driver,
        task.start_url.clone(),
    );
    let timestamp = action.timestamp.clone();
    client
        .submit_action(&run_id, &action)
        .with_context(|| format!("submit action for run {run_id}"))?;
    info!("action {} submitted run={run_id}", action.id);

    let summary = client
        .fetch_summary(&run_id)
        .with_context(|| format!("fetch summary for run {run_id}"))?;
    let success = evaluate::all_criteria_met(&summary.observations, &task.success_criteria);
    info!(
        "run {run_id} judged success={success} observations={}",
        summary.observations.len()
    );

    Ok(TaskReport {
        task_id: task.id.clone(),
        run_id,
        driver: driver.to_string(),
        timestamp,
        success,
        criteria: task.success_criteria.clone(),
        observations: summary.observations,
        evidence: summary.evidence,
    })
}

/// Execute a task and persist its artifacts: the per-run JSON report plus one
/// row appended to the cumulative task ledger. Nothing is written if the run
/// itself fails. There is no rollback between the two writes.
pub fn run_task_job(
    client: &ControlPlaneClient,
    cfg: &Config,
    driver: &str,
    task: &TaskSpec,
    reports_dir: &Path,
) -> Result<TaskJobOutput> {
    let report = execute_task(client, cfg, driver, task)?;
    let report_path = report::write_task_report(reports_dir, &report)?;

    let ledger_path = reports_dir.join(&cfg.reports.task_ledger_filename);
    let mut ledger = Ledger::open(&ledger_path, &TASK_LEDGER_COLUMNS)?;
    let success = report.success.to_string();
    ledger.append(&[
        report.task_id.as_str(),
        report.run_id.as_str(),
        report.driver.as_str(),
        report.timestamp.as_str(),
        success.as_str(),
    ])?;

    Ok(TaskJobOutput {
        report,
        report_path,
    })
}

/// The suite counterpart of [`execute_task`]: the same inner sequence once
/// per entry, judged by the single-phrase policy, all within one shared
/// client scope. Results accumulate in memory; a control-plane failure on any
/// entry aborts the whole batch, discarding earlier entries.
pub fn execute_suite(
    client: &ControlPlaneClient,
    cfg: &Config,
    driver: &str,
    suite: &SuiteSpec,
) -> Result<Vec<SuiteEntry>> {
    let mut entries = Vec::with_capacity(suite.tasks.len());

    for task in &suite.tasks {
        let run_id = client
            .create_run(driver)
            .with_context(|| format!("create run for task {}", task.id))?;
        info!("run {run_id} created driver={driver} task={}", task.id);

        let action = Action::navigate(
            &run_id,
            &cfg.harness.agent_name,
            driver,
            task.start_url.clone(),
        );
        client
            .submit_action(&run_id, &action)
            .with_context(|| format!("submit action for run {run_id}"))?;

        let summary = client
            .fetch_summary(&run_id)
            .with_context(|| format!("fetch summary for run {run_id}"))?;
        let success = evaluate::phrase_present(&summary.observations, &task.success_phrase);
        info!("run {run_id} judged success={success} task={}", task.id);

        entries.push(SuiteEntry {
            task_id: task.id.clone(),
            run_id,
            success,
            observations: summary.observations,
            evidence: summary.evidence,
        });
    }

    Ok(entries)
}

/// Execute a whole suite and persist its artifacts only once every entry has
/// completed: one batch JSON document plus one suite-ledger row per entry.
/// All-or-nothing on purpose; a mid-suite failure leaves no artifact at all.
pub fn run_suite_job(
    client: &ControlPlaneClient,
    cfg: &Config,
    driver: &str,
    suite: &SuiteSpec,
    reports_dir: &Path,
) -> Result<SuiteJobOutput> {
    let started = now_rfc3339();
    let entries = execute_suite(client, cfg, driver, suite)?;
    info!(
        "suite complete tasks={} started={started}",
        entries.len()
    );

    let report_path = report::write_suite_report(reports_dir, &entries)?;

    let ledger_path = reports_dir.join(&cfg.reports.suite_ledger_filename);
    let mut ledger = Ledger::open(&ledger_path, &SUITE_LEDGER_COLUMNS)?;
    for entry in &entries {
        let success = entry.success.to_string();
        ledger.append(&[entry.task_id.as_str(), entry.run_id.as_str(), success.as_str()])?;
    }

    Ok(SuiteJobOutput {
        entries,
        report_path,
    })
}
