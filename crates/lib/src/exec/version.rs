//! Lenient version parsing for versions reported by blogc.
//!
//! Release builds report plain `X.Y.Z`, but development builds may report
//! fewer or more numeric components and a `-dirty` style suffix, none of
//! which strict semver accepts as-is.

use semver::Version;

use crate::exec::types::ExecError;

/// Parse a version string, zero-filling missing components.
///
/// Numeric components past the third are kept as build metadata so that the
/// version still round-trips through `Display` recognizably.
pub fn parse_version(raw: &str) -> Result<Version, ExecError> {
  if let Ok(version) = Version::parse(raw) {
    return Ok(version);
  }

  let split = raw.find('-').unwrap_or(raw.len());
  let (numbers, suffix) = raw.split_at(split);

  let mut parts: Vec<&str> = numbers.split('.').collect();
  let extra = if parts.len() > 3 { parts.split_off(3) } else { Vec::new() };
  while parts.len() < 3 {
    parts.push("0");
  }

  let mut normalized = parts.join(".");
  normalized.push_str(suffix);
  if !extra.is_empty() {
    normalized.push('+');
    normalized.push_str(&extra.join("."));
  }

  Version::parse(&normalized).map_err(|source| ExecError::InvalidVersion {
    version: raw.to_string(),
    source,
  })
}

/// Fail unless `actual` is at least `required`.
pub fn check_version(actual: &Version, actual_raw: &str, required: &str) -> Result<(), ExecError> {
  let required_version = parse_version(required)?;
  if required_version > *actual {
    return Err(ExecError::VersionTooOld {
      required: required.to_string(),
      actual: actual_raw.to_string(),
    });
  }
  Ok(())
}
