//! Example submitting a query to CasJobs and reporting its status
//!
//! Reads credentials from `CasJobs.config` in the current directory, or
//! from the path given as the first argument. The query defaults to a
//! small PhotoObj sample.

use casjobs_client::{CasJobs, JobStatus};
use std::env;

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let mut args = env::args().skip(1);
    let mut client = CasJobs::new();
    match args.next() {
        Some(path) => client.load_config(&path)?,
        None => client.load_default_config()?,
    }
    let query = args
        .next()
        .unwrap_or_else(|| "SELECT TOP 10 objID, ra, dec FROM PhotoObj".to_string());
    let context = client.settings().target.as_str();

    println!("Running quick query against {}", context);
    match client.quick_run(&query, Some(context), Some("demo"), false) {
        Ok(rows) => println!("{}", rows),
        Err(e) => eprintln!("Quick query failed: {}", e),
    }

    let job_id = client.submit_job(&query, Some(context), Some("demo-batch"), None)?;
    let code = client.get_job_status(job_id)?;
    match JobStatus::from_code(code) {
        Some(status) => println!("Job {} is {}", job_id, status),
        None => println!("Job {} has unknown status code {}", job_id, code),
    }

    Ok(())
}
