//! Conversions between ATIME/WTIME register values and milliseconds.
//!
//! Both registers count down from 256 in 2.4 ms cycles: a register value of
//! `v` means `256 - v` cycles. Requested times are rounded up to the next whole
//! cycle, so the achieved time is never shorter than requested unless the
//! request exceeds the longest time the register can hold.

use crate::Error;

/// Duration of one integration or wait cycle.
pub const CYCLE_MS: f32 = 2.4;

/// Integration time the datasheet gives for ATIME = 0 (256 cycles).
pub const ATIME_MAX_MS: f32 = 700.0;

/// WLONG multiplies every wait cycle by this factor.
pub const WLONG_FACTOR: f32 = 12.0;

/// Longest wait with WLONG clear.
pub const WTIME_MAX_MS: f32 = 256.0 * CYCLE_MS;

/// Longest wait with WLONG set.
pub const WTIME_LONG_MAX_MS: f32 = WTIME_MAX_MS * WLONG_FACTOR;

// Slack for float error when a request is an exact multiple of the cycle.
const CYCLE_EPSILON: f32 = 1e-3;

fn validate(ms: f32) -> Result<(), Error> {
    if !ms.is_finite() || ms < 0.0 {
        log::error!("Time {} ms is not a finite, non-negative value", ms);
        return Err(Error::InvalidArg);
    }
    Ok(())
}

// Number of whole cycles needed to cover `ms`, at least one.
fn cycles_for(ms: f32, cycle_ms: f32) -> u32 {
    let exact = ms / cycle_ms;
    let whole = exact as u32;
    // `as` saturates, so huge requests must not step past u32::MAX.
    let cycles = if exact - whole as f32 > CYCLE_EPSILON {
        whole.saturating_add(1)
    } else {
        whole
    };
    cycles.max(1)
}

// Register value for `cycles` cycles, saturating at 256 cycles (register 0).
fn register_for(cycles: u32) -> u8 {
    if cycles >= 256 {
        0
    } else {
        (256 - cycles) as u8
    }
}

fn cycles_of(register: u8) -> u16 {
    256 - u16::from(register)
}

/// Converts an integration time to its ATIME register value.
///
/// Anything at or below one cycle (including 0 ms) saturates to `0xFF`
/// (2.4 ms); anything above 255 cycles saturates to `0x00` (700 ms).
pub fn atime_from_ms(ms: f32) -> Result<u8, Error> {
    validate(ms)?;
    Ok(register_for(cycles_for(ms, CYCLE_MS)))
}

/// Converts an ATIME register value to milliseconds. `0x00` is 700 ms.
pub fn atime_to_ms(atime: u8) -> f32 {
    if atime == 0 {
        return ATIME_MAX_MS;
    }
    cycles_of(atime) as f32 * CYCLE_MS
}

/// Converts a wait time to its WTIME register value and WLONG bit.
///
/// Waits up to 614.4 ms use 2.4 ms cycles; longer waits set WLONG and use
/// 28.8 ms cycles, saturating at 7372.8 ms.
pub fn wtime_from_ms(ms: f32) -> Result<(u8, bool), Error> {
    validate(ms)?;
    let cycles = cycles_for(ms, CYCLE_MS);
    if cycles <= 256 {
        return Ok((register_for(cycles), false));
    }
    let cycles = cycles_for(ms, CYCLE_MS * WLONG_FACTOR);
    Ok((register_for(cycles), true))
}

/// Converts a WTIME register value and WLONG bit to milliseconds.
pub fn wtime_to_ms(wtime: u8, wlong: bool) -> f32 {
    let ms = cycles_of(wtime) as f32 * CYCLE_MS;
    if wlong {
        ms * WLONG_FACTOR
    } else {
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {} ms, got {} ms",
            expected,
            actual
        );
    }

    #[test]
    fn full_scale_integration_reads_back_as_700_ms() {
        assert_eq!(atime_from_ms(614.4), Ok(0x00));
        assert_eq!(atime_to_ms(0x00), 700.0);
    }

    #[test]
    fn zero_ms_saturates_to_one_cycle() {
        assert_eq!(atime_from_ms(0.0), Ok(0xFF));
        assert_close(atime_to_ms(0xFF), 2.4);
    }

    #[test]
    fn requests_round_up_to_the_next_cycle() {
        let atime = atime_from_ms(100.0).unwrap();
        assert_eq!(atime, 214);
        assert_close(atime_to_ms(atime), 100.8);
    }

    #[test]
    fn exact_cycle_multiples_are_kept() {
        for atime in 1..=255u8 {
            let ms = atime_to_ms(atime);
            assert_eq!(atime_from_ms(ms), Ok(atime), "{} ms", ms);
        }
    }

    #[test]
    fn long_requests_saturate_to_700_ms() {
        assert_eq!(atime_from_ms(613.0), Ok(0x00));
        assert_eq!(atime_from_ms(700.0), Ok(0x00));
        assert_eq!(atime_from_ms(10_000.0), Ok(0x00));
    }

    #[test]
    fn huge_finite_requests_saturate_instead_of_wrapping() {
        assert_eq!(atime_from_ms(1.0e12), Ok(0x00));
        assert_eq!(atime_from_ms(f32::MAX), Ok(0x00));
        assert_eq!(wtime_from_ms(1.0e12), Ok((0x00, true)));
        assert_eq!(wtime_from_ms(f32::MAX), Ok((0x00, true)));
    }

    #[test]
    fn invalid_times_are_rejected() {
        assert_eq!(atime_from_ms(-1.0), Err(Error::InvalidArg));
        assert_eq!(atime_from_ms(f32::NAN), Err(Error::InvalidArg));
        assert_eq!(atime_from_ms(f32::INFINITY), Err(Error::InvalidArg));
        assert_eq!(wtime_from_ms(-0.5), Err(Error::InvalidArg));
    }

    #[test]
    fn short_waits_leave_wlong_clear() {
        assert_eq!(wtime_from_ms(2.4), Ok((0xFF, false)));
        assert_eq!(wtime_from_ms(614.4), Ok((0x00, false)));
        assert_close(wtime_to_ms(0x00, false), 614.4);
    }

    #[test]
    fn long_waits_switch_to_wlong_cycles() {
        let (wtime, wlong) = wtime_from_ms(1000.0).unwrap();
        assert!(wlong);
        // 1000 / 28.8 = 34.7 -> 35 cycles
        assert_eq!(wtime, 221);
        assert_close(wtime_to_ms(wtime, wlong), 1008.0);
    }

    #[test]
    fn very_long_waits_saturate() {
        assert_eq!(wtime_from_ms(60_000.0), Ok((0x00, true)));
        assert_close(wtime_to_ms(0x00, true), WTIME_LONG_MAX_MS);
    }
}
