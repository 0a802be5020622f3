use crate::consts::{USD_DECIMALS, WIRE_DECIMALS};
use crate::prelude::*;
use chrono::prelude::Utc;
use uuid::Uuid;

/// Difference above which the 8-decimal rendering of a float is considered lossy.
const WIRE_TOLERANCE: f64 = 1e-12;
/// Difference above which scaling a float to an integer is considered lossy.
const INT_TOLERANCE: f64 = 1e-3;

/// Encodes a price or size as the canonical decimal string the exchange hashes.
///
/// The value is rendered with 8 fractional digits, then trailing zeros and a
/// dangling decimal point are stripped. `-0` becomes `0`. Values that cannot be
/// written at 8 decimals without loss are rejected instead of being truncated.
pub fn float_to_wire(x: f64) -> Result<String> {
    let lossy = || Error::Precision {
        value: x,
        decimals: WIRE_DECIMALS,
    };
    if !x.is_finite() {
        return Err(lossy());
    }

    let rounded = format!("{:.*}", WIRE_DECIMALS as usize, x);
    let parsed: f64 = rounded.parse().map_err(|_| lossy())?;
    if (parsed - x).abs() >= WIRE_TOLERANCE {
        return Err(lossy());
    }

    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" || trimmed.is_empty() {
        Ok("0".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Scales `x` by `10^decimals` and rounds it to an integer.
pub fn float_to_int(x: f64, decimals: u32) -> Result<i64> {
    let lossy = || Error::Precision { value: x, decimals };

    let with_decimals = x * 10f64.powi(decimals as i32);
    if !with_decimals.is_finite() {
        return Err(lossy());
    }
    let rounded = with_decimals.round();
    if (rounded - with_decimals).abs() >= INT_TOLERANCE {
        return Err(lossy());
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(lossy());
    }
    Ok(rounded as i64)
}

pub fn float_to_int_for_hashing(x: f64) -> Result<i64> {
    float_to_int(x, WIRE_DECIMALS)
}

pub fn float_to_usd_int(x: f64) -> Result<i64> {
    float_to_int(x, USD_DECIMALS)
}

/// USD amounts of class transfers are written with exactly 6 decimals,
/// trailing zeros included.
pub fn float_to_usd_string(x: f64) -> Result<String> {
    let lossy = || Error::Precision {
        value: x,
        decimals: USD_DECIMALS,
    };
    if !x.is_finite() {
        return Err(lossy());
    }

    let rendered = format!("{:.*}", USD_DECIMALS as usize, x);
    let parsed: f64 = rendered.parse().map_err(|_| lossy())?;
    if (parsed - x).abs() >= WIRE_TOLERANCE {
        return Err(lossy());
    }
    Ok(rendered)
}

/// Client order ids travel as `0x` followed by the 16 uuid bytes in hex.
pub fn uuid_to_hex_string(uuid: Uuid) -> String {
    format!("0x{}", hex::encode(uuid.as_bytes()))
}

/// Wall-clock milliseconds, the usual source of a fresh nonce.
pub fn timestamp_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}
