//! Counting engraved stones after a number of blinks.
//!
//! On every blink each stone changes by the first matching rule:
//! `0` becomes `1`; number with even count of digits splits into
//! its left and right halves; anything else is multiplied by 2024.
//!
//! Stones never interact, so every stone is evolved alone for all blinks
//! it has left, and each split-off half becomes new work item.

use log::{debug, warn};
use predicate_queue::PriorityQueue;
use rustc_hash::FxHashMap;

use crate::error::ParseError;

/// Stone together with number of blinks it still has to live through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimedStone {
    pub value: u64,
    pub lifespan: u32,
}

pub fn parse_stones(input: &str) -> Result<Vec<u64>, ParseError> {
    let stones = input
        .split_whitespace()
        .map(|text| text.parse().map_err(|_| ParseError::Stone(text.to_owned())))
        .collect::<Result<Vec<u64>, ParseError>>()?;
    if stones.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(stones)
}

#[inline]
fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

/// Applies one blink, returns changed stone and split-off right half if any.
/// `None` if the changed stone doesn't fit `u64`.
#[inline]
pub fn blink(value: u64) -> Option<(u64, Option<u64>)> {
    if value == 0 {
        return Some((1, None));
    }
    let digits = digit_count(value);
    if digits % 2 == 0 {
        let divisor = 10u64.pow(digits / 2);
        Some((value / divisor, Some(value % divisor)))
    } else {
        value.checked_mul(2024).map(|value| (value, None))
    }
}

/// Number of stones after `blinks` blinks.
/// `None` if some stone outgrows `u64` on the way.
///
/// Every popped work item produces exactly one final stone,
/// so running time is proportional to the answer.
pub fn count_after(stones: &[u64], blinks: u32) -> Option<u64> {
    let initial = stones
        .iter()
        .map(|&value| TimedStone {
            value,
            lifespan: blinks,
        })
        .collect();
    // Stones with less blinks left are processed first.
    let mut queue = PriorityQueue::with_predicate(
        |a: &TimedStone, b: &TimedStone| a.lifespan > b.lifespan,
        initial,
    );

    let mut count = 0u64;
    while let Some(mut stone) = queue.pop() {
        count += 1;
        for step in 0..stone.lifespan {
            let Some((value, split)) = blink(stone.value) else {
                warn!("Stone {} outgrows u64 after {} blinks", stone.value, step);
                return None;
            };
            stone.value = value;
            if let Some(right) = split {
                queue.push(TimedStone {
                    value: right,
                    lifespan: stone.lifespan - step - 1,
                });
            }
        }
    }
    debug!("{} stones after {} blinks", count, blinks);
    Some(count)
}

/// Same as [`count_after`] but shares work between equal stones,
/// usable for big numbers of blinks.
/// `None` if some stone or the count itself outgrows `u64`.
pub fn count_after_memoized(stones: &[u64], blinks: u32) -> Option<u64> {
    let mut memo: FxHashMap<TimedStone, u64> = FxHashMap::default();
    let mut total = 0u64;
    for &value in stones {
        let stone = TimedStone {
            value,
            lifespan: blinks,
        };
        let count = count_memoized(stone, &mut memo)?;
        total = total.checked_add(count)?;
    }
    debug!(
        "{} stones after {} blinks, memoized {} stones",
        total,
        blinks,
        memo.len()
    );
    Some(total)
}

/// Post-order walk with explicit stack, so depth is not limited by blinks.
fn count_memoized(root: TimedStone, memo: &mut FxHashMap<TimedStone, u64>) -> Option<u64> {
    fn known(stone: TimedStone, memo: &FxHashMap<TimedStone, u64>) -> u64 {
        if stone.lifespan == 0 {
            1
        } else {
            memo[&stone]
        }
    }

    // Second field is true when children are already counted.
    let mut stack = vec![(root, false)];
    while let Some((stone, children_counted)) = stack.pop() {
        if stone.lifespan == 0 || memo.contains_key(&stone) {
            continue;
        }
        let Some((value, split)) = blink(stone.value) else {
            warn!("Stone {} outgrows u64", stone.value);
            return None;
        };
        let lifespan = stone.lifespan - 1;
        let left = TimedStone { value, lifespan };
        let right = split.map(|value| TimedStone { value, lifespan });

        if children_counted {
            let mut count = known(left, memo);
            if let Some(right) = right {
                count = count.checked_add(known(right, memo))?;
            }
            memo.insert(stone, count);
        } else {
            stack.push((stone, true));
            stack.push((left, false));
            stack.extend(right.map(|right| (right, false)));
        }
    }
    Some(known(root, memo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_logging;

    #[test]
    fn test_blink_rules() {
        assert_eq!(blink(0), Some((1, None)));
        assert_eq!(blink(1), Some((2024, None)));
        assert_eq!(blink(10), Some((1, Some(0))));
        assert_eq!(blink(99), Some((9, Some(9))));
        assert_eq!(blink(999), Some((2021976, None)));
        assert_eq!(blink(1000), Some((10, Some(0))));
        assert_eq!(blink(253000), Some((253, Some(0))));
        assert_eq!(blink(10_000_000_000_000_000), None);
        assert_eq!(blink(u64::MAX), Some((1844674407, Some(3709551615))));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(1_000_000), 7);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_stones("125 17\n"), Ok(vec![125, 17]));
        assert_eq!(parse_stones("  "), Err(ParseError::Empty));
        assert_eq!(
            parse_stones("1 -2"),
            Err(ParseError::Stone("-2".to_owned()))
        );
    }

    #[test]
    fn test_example() {
        init_logging();
        let stones = parse_stones("125 17").unwrap();
        assert_eq!(count_after(&stones, 0), Some(2));
        assert_eq!(count_after(&stones, 1), Some(3));
        assert_eq!(count_after(&stones, 6), Some(22));
        assert_eq!(count_after(&stones, 25), Some(55312));
        assert_eq!(count_after_memoized(&stones, 6), Some(22));
        assert_eq!(count_after_memoized(&stones, 25), Some(55312));
    }

    #[test]
    fn test_single_blink_line() {
        // 0 1 10 99 999 -> 1 2024 1 0 9 9 2021976
        assert_eq!(count_after(&[0, 1, 10, 99, 999], 1), Some(7));
    }

    #[test]
    fn test_stone_outgrows_u64() {
        init_logging();
        // Odd count of digits, multiplying by 2024 overflows
        let huge = parse_stones("10000000000000000").unwrap();
        assert_eq!(count_after(&huge, 0), Some(1));
        assert_eq!(count_after(&huge, 1), None);
        assert_eq!(count_after_memoized(&huge, 0), Some(1));
        assert_eq!(count_after_memoized(&huge, 1), None);

        let huge = parse_stones("7 12345678901234567").unwrap();
        assert_eq!(count_after(&huge, 1), None);
        assert_eq!(count_after_memoized(&huge, 1), None);

        // Even count of digits splits instead
        let split = parse_stones("18446744073709551615").unwrap();
        assert_eq!(count_after(&split, 1), Some(2));
        assert_eq!(count_after_memoized(&split, 1), Some(2));
    }

    #[test]
    fn test_memoized_many_blinks() {
        init_logging();
        assert!(count_after_memoized(&[0], 90).is_some());
        // Count itself doesn't fit u64 long before the last blink
        assert_eq!(count_after_memoized(&[0], 1000), None);
    }

    #[test]
    fn test_strategies_agree() {
        let stones = [0, 7, 512, 4048, 17, 1_000_000];
        for blinks in 0..=20 {
            assert_eq!(
                count_after(&stones, blinks),
                count_after_memoized(&stones, blinks),
                "Mismatch after {} blinks",
                blinks
            );
        }
    }
}
