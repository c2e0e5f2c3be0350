#![allow(missing_docs)]
//! Host-level tests for bucket classification and the color scale.

use contrib_glow::Error;
use contrib_glow::bucket::BucketLimits;
use contrib_glow::palette::{ColorScale, GITHUB_DARK, GITHUB_LIGHT, GITHUB_LIMITS};
use smart_leds::RGB8;

const DEVICE_LIMITS: [u32; 5] = [0, 1, 20, 30, 40];

#[test]
fn lower_bound_is_inclusive_and_upper_bound_exclusive() -> Result<(), Error> {
    let limits = BucketLimits::new(&DEVICE_LIMITS)?;
    for (index, pair) in DEVICE_LIMITS.windows(2).enumerate() {
        assert_eq!(limits.classify(pair[0]), index, "lower bound {}", pair[0]);
        assert_eq!(limits.classify(pair[1] - 1), index, "below {}", pair[1]);
    }
    Ok(())
}

#[test]
fn counts_at_or_past_last_limit_saturate_to_top_bucket() -> Result<(), Error> {
    let limits = BucketLimits::new(&DEVICE_LIMITS)?;
    assert_eq!(limits.classify(40), 3);
    assert_eq!(limits.classify(1000), 3);
    assert_eq!(limits.classify(u32::MAX), 3);
    Ok(())
}

#[test]
fn classify_stays_in_range_for_many_counts() -> Result<(), Error> {
    let limits = BucketLimits::new(&[0, 5, 5, 10])?;
    for count in (0..200).chain([u32::MAX - 1, u32::MAX]) {
        assert!(limits.classify(count) < limits.bucket_count());
    }
    // The empty bucket [5, 5) is never chosen.
    assert_eq!(limits.classify(5), 2);
    Ok(())
}

#[test]
fn counts_below_first_limit_fall_into_top_bucket() -> Result<(), Error> {
    let limits = BucketLimits::new(&[10, 20, 30])?;
    assert_eq!(limits.classify(3), 1);
    Ok(())
}

#[test]
fn limits_must_not_decrease_and_need_two_entries() {
    assert_eq!(BucketLimits::new(&[]), Err(Error::InvalidBucketLimits));
    assert_eq!(BucketLimits::new(&[7]), Err(Error::InvalidBucketLimits));
    assert_eq!(BucketLimits::new(&[0, 20, 10]), Err(Error::InvalidBucketLimits));
    assert_eq!(BucketLimits::new(&[0; 17]), Err(Error::InvalidBucketLimits));
    assert!(BucketLimits::new(&[3, 3]).is_ok());
}

#[test]
fn legend_length_must_match_bucket_count() -> Result<(), Error> {
    let limits = BucketLimits::new(&DEVICE_LIMITS)?;
    assert_eq!(
        ColorScale::new(limits, &GITHUB_DARK),
        Err(Error::LegendLengthMismatch {
            legend_len: 5,
            bucket_count: 4
        })
    );
    let limits = BucketLimits::new(&DEVICE_LIMITS)?;
    let scale = ColorScale::new(limits, &GITHUB_DARK[..4])?;
    assert_eq!(scale.color_for(1000), GITHUB_DARK[3]);
    Ok(())
}

#[test]
fn github_scales_give_forty_and_up_the_brightest_color() -> Result<(), Error> {
    let dark = ColorScale::github_dark()?;
    assert_eq!(dark.limits().as_slice(), &GITHUB_LIMITS);
    assert_eq!(dark.color_for(0), RGB8::new(0x16, 0x1b, 0x22));
    assert_eq!(dark.color_for(1), RGB8::new(0x0e, 0x44, 0x29));
    assert_eq!(dark.color_for(19), RGB8::new(0x0e, 0x44, 0x29));
    assert_eq!(dark.color_for(20), RGB8::new(0x00, 0x6d, 0x32));
    assert_eq!(dark.color_for(39), RGB8::new(0x26, 0xa6, 0x41));
    assert_eq!(dark.color_for(40), RGB8::new(0x39, 0xd3, 0x53));
    assert_eq!(dark.color_for(u32::MAX), RGB8::new(0x39, 0xd3, 0x53));

    let light = ColorScale::github_light()?;
    assert_eq!(light.legend(), &GITHUB_LIGHT);
    assert_eq!(light.color_for(0), RGB8::new(0xeb, 0xed, 0xf0));
    Ok(())
}
