//! Shift Fetcher - Queries AWS SSM Contacts for on-call rotation shifts.

use aws_sdk_ssmcontacts::primitives::DateTime as AwsDateTime;
use aws_sdk_ssmcontacts::types::RotationShift as SdkRotationShift;
use aws_sdk_ssmcontacts::Client;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::{Error, Result};

/// One contiguous assignment of a contact to the rotation.
///
/// A domain copy of the SDK record, so the Calendar Builder never touches
/// SDK types directly.
#[derive(Debug, Clone, Serialize)]
pub struct RotationShift {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Contact ARNs assigned to the shift; only the first is used.
    pub contact_ids: Vec<String>,
    /// Regular vs override shift. Carried through but not yet surfaced.
    pub shift_type: Option<String>,
}

impl RotationShift {
    /// Convert an SDK shift record into the domain model.
    ///
    /// Start and end are required fields on the SDK record; only a
    /// timestamp outside chrono's representable range can fail here.
    pub fn from_sdk(shift: &SdkRotationShift) -> Result<Self> {
        Ok(Self {
            start_time: to_chrono(shift.start_time())?,
            end_time: to_chrono(shift.end_time())?,
            contact_ids: shift.contact_ids().to_vec(),
            shift_type: shift.r#type().map(|t| t.as_str().to_string()),
        })
    }
}

fn to_chrono(ts: &AwsDateTime) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(ts.secs(), ts.subsec_nanos()).ok_or_else(|| {
        Error::MalformedRecord(format!("shift timestamp out of range: {}", ts.secs()))
    })
}

/// Compute the query window relative to `now`: one week of history for
/// context, twelve weeks of future visibility.
pub fn query_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - Duration::weeks(1), now + Duration::weeks(12))
}

/// Fetches rotation shifts for a single configured rotation.
///
/// Holds the process-wide SSM Contacts client; the client is initialized
/// once in `main` and reused across invocations, immutable after that.
pub struct ShiftFetcher {
    client: Client,
    rotation_id: String,
}

impl ShiftFetcher {
    pub fn new(client: Client, rotation_id: impl Into<String>) -> Self {
        Self {
            client,
            rotation_id: rotation_id.into(),
        }
    }

    /// Fetch the shifts overlapping the query window around `now`.
    ///
    /// Only the first page of results is read. A rotation busy enough to
    /// spill past one page gets a warning instead of silent truncation.
    pub async fn fetch(&self, now: DateTime<Utc>) -> Result<Vec<RotationShift>> {
        let (window_start, window_end) = query_window(now);

        let output = self
            .client
            .list_rotation_shifts()
            .rotation_id(&self.rotation_id)
            .start_time(AwsDateTime::from_secs(window_start.timestamp()))
            .end_time(AwsDateTime::from_secs(window_end.timestamp()))
            .send()
            .await
            .map_err(|e| Error::SourceQuery(format!("Failed to list rotation shifts: {}", e)))?;

        if output.next_token().is_some() {
            warn!(
                rotation_id = %self.rotation_id,
                "Rotation returned more shifts than one page; later shifts are dropped"
            );
        }

        let shifts = output
            .rotation_shifts()
            .iter()
            .map(RotationShift::from_sdk)
            .collect::<Result<Vec<_>>>()?;

        info!(count = shifts.len(), "Fetched rotation shifts");
        Ok(shifts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_query_window_bounds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        let (start, end) = query_window(now);
        assert_eq!(now - start, Duration::hours(168));
        assert_eq!(end - now, Duration::hours(2016));
    }

    #[test]
    fn test_from_sdk_maps_all_fields() {
        let sdk_shift = SdkRotationShift::builder()
            .start_time(AwsDateTime::from_secs(1704067200))
            .end_time(AwsDateTime::from_secs(1704672000))
            .contact_ids("arn:aws:ssm-contacts:us-west-2:123456789012:contact/alice")
            .build()
            .unwrap();

        let shift = RotationShift::from_sdk(&sdk_shift).unwrap();
        assert_eq!(shift.start_time.timestamp(), 1704067200);
        assert_eq!(shift.end_time.timestamp(), 1704672000);
        assert_eq!(
            shift.contact_ids,
            vec!["arn:aws:ssm-contacts:us-west-2:123456789012:contact/alice"]
        );
        assert!(shift.shift_type.is_none());
    }

    #[test]
    fn test_from_sdk_empty_contacts_is_not_a_fetch_error() {
        // Missing contacts only fail later, in the calendar builder.
        let sdk_shift = SdkRotationShift::builder()
            .start_time(AwsDateTime::from_secs(1704067200))
            .end_time(AwsDateTime::from_secs(1704672000))
            .build()
            .unwrap();

        let shift = RotationShift::from_sdk(&sdk_shift).unwrap();
        assert!(shift.contact_ids.is_empty());
    }
}
