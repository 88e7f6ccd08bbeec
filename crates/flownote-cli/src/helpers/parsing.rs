//! Parsing helpers for lock windows, timezones and output format.

use chrono_tz::Tz;

use flownote_core::LockDuration;

use crate::errors::CliError;

/// Parse a lock window.
///
/// Accepts `90s`, `15m`, `1h30m`, `2h5m10s`, `HH:MM:SS` or plain seconds.
/// Units must appear in `h`, `m`, `s` order, each at most once.
pub fn parse_lock_duration(value: &str) -> anyhow::Result<LockDuration> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CliError::invalid_input("Lock duration cannot be empty").into());
    }

    if value.contains(':') {
        return parse_clock(value);
    }

    if value.chars().all(|c| c.is_ascii_digit()) {
        let secs: u64 = value
            .parse()
            .map_err(|_| CliError::invalid_input(format!("Invalid lock duration: {}", value)))?;
        return Ok(LockDuration::from_secs(secs)?);
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut last_rank = 0;
    for c in value.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let (rank, factor) = match c.to_ascii_lowercase() {
            'h' => (1, 3600),
            'm' => (2, 60),
            's' => (3, 1),
            _ => {
                return Err(CliError::invalid_input(format!(
                    "Invalid lock duration unit '{}' in {} (use h/m/s)",
                    c, value
                ))
                .into())
            }
        };
        if digits.is_empty() || rank <= last_rank {
            return Err(invalid_duration(value));
        }
        let amount: u64 = digits.parse().map_err(|_| invalid_duration(value))?;
        total = amount
            .checked_mul(factor)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(|| invalid_duration(value))?;
        digits.clear();
        last_rank = rank;
    }
    if !digits.is_empty() {
        return Err(invalid_duration(value));
    }

    Ok(LockDuration::from_secs(total)?)
}

fn parse_clock(value: &str) -> anyhow::Result<LockDuration> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid_duration(value));
    }
    let mut fields = [0u32; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part.trim().parse().map_err(|_| invalid_duration(value))?;
    }
    Ok(LockDuration::from_hms(fields[0], fields[1], fields[2])?)
}

fn invalid_duration(value: &str) -> anyhow::Error {
    CliError::invalid_input(format!(
        "Invalid lock duration: {} (expected e.g. 90s, 15m, 1h30m or HH:MM:SS)",
        value
    ))
    .into()
}

/// Parse an IANA timezone name.
pub fn parse_timezone(value: &str) -> anyhow::Result<Tz> {
    value.trim().parse::<Tz>().map_err(|_| {
        CliError::invalid_input(format!(
            "Unknown timezone: {} (expected an IANA name such as Europe/Paris)",
            value
        ))
        .into()
    })
}

/// Validate `--format`; only `table` and `plain` exist.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<&str>> {
    match value {
        None => Ok(None),
        Some(v @ ("table" | "plain")) => Ok(Some(v)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}
