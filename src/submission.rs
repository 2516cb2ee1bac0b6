use crate::directory::StudentDirectory;
use crate::err::{Error, Result};
use crate::flash::Flash;
use crate::ledger::MarksLedger;
use crate::models::{MarkRecord, MarkSubmission, Student};
use crate::sms::{send_sms, SmsGateway};

/// Marks strictly below this trigger a parent alert.
pub const THRESHOLD: i64 = 50;

pub const SMS_SENT: &str = "Alert SMS sent successfully!";
pub const SMS_FAILED: &str = "Failed to send alert SMS. Please try again later.";
pub const MARKS_SUBMITTED: &str = "Marks submitted successfully!";
pub const STUDENT_NOT_FOUND: &str = "Student not found. Please check the student ID.";
pub const MISSING_FIELDS: &str = "Please fill in every field.";
pub const INVALID_MARK: &str = "Please enter a whole number for the mark.";
pub const GENERIC_FAILURE: &str = "An error occurred while submitting the form. Please try again.";

pub fn parse(form: MarkSubmission) -> Result<MarkRecord> {
    let present = |field: Option<String>| field.filter(|v| !v.trim().is_empty());
    let (student_id, subject, raw_mark) =
        match (present(form.student_id), present(form.subject), form.mark) {
            (Some(student_id), Some(subject), Some(mark)) => (student_id, subject, mark),
            _ => return Err(Error::validation(MISSING_FIELDS)),
        };
    let mark = raw_mark
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::validation(INVALID_MARK))?;

    Ok(MarkRecord {
        student_id,
        subject,
        mark,
    })
}

pub fn alert_message(student: &Student, record: &MarkRecord) -> String {
    format!(
        "Alert: Your child {} scored {} in {}.",
        student.name, record.mark, record.subject
    )
}

/// Runs one form submission end to end and returns the status messages to
/// show, in the order they were produced.
///
/// Lookup happens before anything is written. An alert, when due, goes out
/// before the mark is recorded and its failure does not stop the write.
/// Nothing already done is undone when a later step fails.
pub async fn submit(
    form: MarkSubmission,
    directory: &dyn StudentDirectory,
    ledger: &dyn MarksLedger,
    gateway: &dyn SmsGateway,
) -> Vec<Flash> {
    let mut flashes = Vec::new();
    if let Err(err) = run(form, directory, ledger, gateway, &mut flashes).await {
        flashes.push(failure_flash(&err));
    }
    flashes
}

async fn run(
    form: MarkSubmission,
    directory: &dyn StudentDirectory,
    ledger: &dyn MarksLedger,
    gateway: &dyn SmsGateway,
    flashes: &mut Vec<Flash>,
) -> Result<()> {
    let record = parse(form)?;
    log::info!(
        "Received data - Student ID: {}, Subject: {}, Mark: {}",
        record.student_id,
        record.subject,
        record.mark
    );

    let student = directory
        .find_student(&record.student_id)
        .await?
        .ok_or_else(|| Error::NotFound {
            message: format!("student `{}`", record.student_id),
        })?;

    if record.mark < THRESHOLD {
        let body = alert_message(&student, &record);
        if send_sms(gateway, &student.parent_contact, &body).await {
            flashes.push(Flash::success(SMS_SENT));
        } else {
            flashes.push(Flash::danger(SMS_FAILED));
        }
    }

    ledger.record_mark(&record).await?;
    flashes.push(Flash::success(MARKS_SUBMITTED));
    Ok(())
}

fn failure_flash(err: &Error) -> Flash {
    match err {
        Error::Validation { message } => {
            log::warn!("Rejected submission: {}", message);
            Flash::danger(message.clone())
        }
        Error::NotFound { .. } => Flash::danger(STUDENT_NOT_FOUND),
        other => {
            log::error!("Error processing form: {}", other);
            Flash::danger(GENERIC_FAILURE)
        }
    }
}
