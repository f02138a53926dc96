//! Job submission and job query operations

use crate::error::Result;
use super::client::{parse_int_response, CasJobs};
use super::transport::Transport;

impl<T: Transport> CasJobs<T> {
    /// Requests cancellation of a job
    pub fn cancel_job(&self, job_id: i64) -> Result<()> {
        self.call_auth("CancelJob", &[("jobId", job_id.to_string())])?;
        Ok(())
    }

    /// Runs a query immediately and returns the raw response
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use casjobs_client::CasJobs;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut client = CasJobs::new();
    /// client.set_login(1234, "secret");
    /// let rows = client.quick_run("SELECT TOP 10 objID FROM PhotoObj", Some("DR13"), None, false)?;
    /// println!("{}", rows);
    /// # Ok(())
    /// # }
    /// ```
    pub fn quick_run(
        &self,
        query: &str,
        context: Option<&str>,
        task_name: Option<&str>,
        system: bool,
    ) -> Result<String> {
        self.quick_job("ExecuteQuickJob", query, context, task_name, system)
    }

    /// Runs a query immediately, returning the result as a dataset
    pub fn quick_run_dataset(
        &self,
        query: &str,
        context: Option<&str>,
        task_name: Option<&str>,
        system: bool,
    ) -> Result<String> {
        self.quick_job("ExecuteQuickJobDS", query, context, task_name, system)
    }

    /// Runs a query immediately through the object id variant of the service
    pub fn quick_run_object_id(
        &self,
        query: &str,
        context: Option<&str>,
        task_name: Option<&str>,
        system: bool,
    ) -> Result<String> {
        self.quick_job("ExecuteQuickJobOID", query, context, task_name, system)
    }

    fn quick_job(
        &self,
        operation: &str,
        query: &str,
        context: Option<&str>,
        task_name: Option<&str>,
        system: bool,
    ) -> Result<String> {
        self.call_auth(
            operation,
            &[
                ("qry", query.to_string()),
                ("context", opt(context)),
                ("taskname", opt(task_name)),
                ("isSystem", system.to_string()),
            ],
        )
    }

    /// Numeric status of a job; see [`JobStatus::from_code`](super::JobStatus::from_code)
    pub fn get_job_status(&self, job_id: i64) -> Result<i64> {
        let body = self.call_auth("GetJobStatus", &[("jobId", job_id.to_string())])?;
        parse_int_response("GetJobStatus", &body)
    }

    /// Raw `GetJobTypes` response
    pub fn get_job_types(&self) -> Result<String> {
        self.call_auth("GetJobTypes", &[])
    }

    /// Raw `GetJobs` response for jobs matching `conditions`
    ///
    /// Credentials go out as `owner_wsid`/`owner_pw` for this operation.
    ///
    /// # Arguments
    ///
    /// * `conditions` - Filter in the service's own syntax, e.g. `"JobID : 1234;"`
    /// * `system` - Whether to include system jobs
    ///
    /// # Returns
    ///
    /// The response body as sent by the service
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use casjobs_client::CasJobs;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut client = CasJobs::new();
    /// client.set_login(1234, "secret");
    /// let listing = client.get_jobs("Status : 5;", false)?;
    /// println!("{}", listing);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_jobs(&self, conditions: &str, system: bool) -> Result<String> {
        self.call_with_login("owner_wsid", "owner_pw", "GetJobs", &jobs_filter(conditions, system))
    }

    /// Raw `GetJobsJob` response
    ///
    /// The body describes [`Job`](crate::Job) records; decoding it is left
    /// to the caller.
    pub fn get_jobs_job(&self, conditions: &str, system: bool) -> Result<String> {
        self.call_with_login("owner_wsid", "owner_pw", "GetJobsJob", &jobs_filter(conditions, system))
    }

    /// Starts an extract job for a MyDB table
    ///
    /// `output_type` is one of the labels in [`FMT_TYPES`](super::FMT_TYPES);
    /// the service does the validation.
    pub fn submit_extract_job(&self, table_name: &str, output_type: &str) -> Result<()> {
        self.call_auth(
            "SubmitExtractJob",
            &[
                ("tableName", table_name.to_string()),
                ("type", output_type.to_string()),
            ],
        )?;
        Ok(())
    }

    /// Submits a batch query and returns the new job id
    ///
    /// # Arguments
    ///
    /// * `query` - The SQL text to run
    /// * `context` - Database context, e.g. `"DR13"` or `"MyDB"`; sent empty when `None`
    /// * `task_name` - Label shown in the job listing
    /// * `estimate` - Expected run time in minutes, used by the service to pick a queue
    ///
    /// # Returns
    ///
    /// The job id assigned by the service
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use casjobs_client::CasJobs;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut client = CasJobs::new();
    /// client.set_login(1234, "secret");
    /// let job_id = client.submit_job("SELECT COUNT(*) FROM Galaxy", Some("DR13"), Some("count"), None)?;
    /// println!("Job ID: {}", job_id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_job(
        &self,
        query: &str,
        context: Option<&str>,
        task_name: Option<&str>,
        estimate: Option<i64>,
    ) -> Result<i64> {
        let body = self.call_auth(
            "SubmitJob",
            &[
                ("qry", query.to_string()),
                ("context", opt(context)),
                ("taskname", opt(task_name)),
                ("estimate", opt_int(estimate)),
            ],
        )?;
        parse_int_response("SubmitJob", &body)
    }

    /// Submits a batch query writing into a MyDB table
    ///
    /// # Arguments
    ///
    /// * `query` - The SQL text to run
    /// * `table_name` - Destination table in MyDB
    /// * `context` - Database context; sent empty when `None`
    /// * `task_name` - Label shown in the job listing
    /// * `estimate` - Expected run time in minutes
    ///
    /// # Returns
    ///
    /// The job id assigned by the service
    pub fn submit_job_into(
        &self,
        query: &str,
        table_name: &str,
        context: Option<&str>,
        task_name: Option<&str>,
        estimate: Option<i64>,
    ) -> Result<i64> {
        let body = self.call_auth(
            "SubmitJobInto",
            &[
                ("qry", query.to_string()),
                ("context", opt(context)),
                ("table", table_name.to_string()),
                ("taskname", opt(task_name)),
                ("estimate", opt_int(estimate)),
            ],
        )?;
        parse_int_response("SubmitJobInto", &body)
    }

    /// Uploads CSV data into a MyDB table
    pub fn upload_data(&self, table_name: &str, table_data: &str) -> Result<()> {
        self.call_auth(
            "UploadData",
            &[
                ("tableName", table_name.to_string()),
                ("data", table_data.to_string()),
            ],
        )?;
        Ok(())
    }
}

fn jobs_filter(conditions: &str, system: bool) -> [(&'static str, String); 2] {
    [
        ("conditions", conditions.to_string()),
        ("includeSystem", system.to_string()),
    ]
}

// absent optional parameters go out as empty values
fn opt(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn opt_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
