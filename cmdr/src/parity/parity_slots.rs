/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

/// How many numbers the classifier reads.
pub const PARITY_SLOT_COUNT: u8 = 10;

/// Value of a slot that never received a number.
pub const EMPTY_SLOT: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Remainder based, so `-3` is odd and `0` is even.
    #[must_use]
    pub fn of(number: i32) -> Self {
        if number % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Two rows of [`PARITY_SLOT_COUNT`] slots, both starting out as [`EMPTY_SLOT`]. The
/// number read at position `i` goes to slot `i` of the evens or of the odds, so the
/// other row keeps [`EMPTY_SLOT`] at that position.
///
/// Both statistics read the slots as they are:
/// - [`Self::even_count`] counts non empty even slots, so an entered `0` is not counted.
/// - [`Self::odd_average`] divides by [`PARITY_SLOT_COUNT`], empty slots included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParitySlots {
    evens: Vec<i32>,
    odds: Vec<i32>,
}

impl Default for ParitySlots {
    fn default() -> Self {
        let slot_count = usize::from(PARITY_SLOT_COUNT);
        Self {
            evens: vec![EMPTY_SLOT; slot_count],
            odds: vec![EMPTY_SLOT; slot_count],
        }
    }
}

impl ParitySlots {
    /// Put `number` into slot `index` of the row matching its parity. Returns `None`
    /// and changes nothing when `index` is past the last slot.
    pub fn place(&mut self, index: usize, number: i32) -> Option<Parity> {
        let parity = Parity::of(number);
        let row = match parity {
            Parity::Even => &mut self.evens,
            Parity::Odd => &mut self.odds,
        };
        let slot = row.get_mut(index)?;
        *slot = number;
        Some(parity)
    }

    #[must_use]
    pub fn evens(&self) -> &[i32] { &self.evens }

    #[must_use]
    pub fn odds(&self) -> &[i32] { &self.odds }

    #[must_use]
    pub fn even_count(&self) -> usize {
        self.evens.iter().filter(|&&it| it != EMPTY_SLOT).count()
    }

    #[must_use]
    pub fn odd_average(&self) -> f64 {
        let sum: f64 = self.odds.iter().copied().map(f64::from).sum();
        sum / f64::from(PARITY_SLOT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn slots_from(numbers: &[i32]) -> ParitySlots {
        let mut slots = ParitySlots::default();
        for (index, &number) in numbers.iter().enumerate() {
            slots.place(index, number);
        }
        slots
    }

    #[test]
    fn test_numbers_keep_their_position() {
        let slots = slots_from(&[2, 3, 4, 5, 6, 7, 8, 9, 10, 1]);
        assert_eq2!(slots.evens(), &[2, 0, 4, 0, 6, 0, 8, 0, 10, 0]);
        assert_eq2!(slots.odds(), &[0, 3, 0, 5, 0, 7, 0, 9, 0, 1]);
        assert_eq2!(slots.even_count(), 5);
        assert_eq2!(slots.odd_average(), 2.5);
    }

    #[test]
    fn test_zero_is_even_but_not_counted() {
        let slots = slots_from(&[0, 0, 2]);
        assert_eq2!(slots.even_count(), 1);
        assert_eq2!(slots.odd_average(), 0.0);
    }

    #[test]
    fn test_negative_numbers() {
        let slots = slots_from(&[-3, -4]);
        assert_eq2!(slots.odds()[0], -3);
        assert_eq2!(slots.evens()[1], -4);
        assert_eq2!(slots.even_count(), 1);
        assert_eq2!(slots.odd_average(), -0.3);
    }

    #[test]
    fn test_place_past_last_slot() {
        let mut slots = ParitySlots::default();
        assert_eq2!(slots.place(10, 7), None);
        assert_eq2!(slots, ParitySlots::default());
    }

    #[test_case(4, Parity::Even)]
    #[test_case(0, Parity::Even)]
    #[test_case(-7, Parity::Odd)]
    #[test_case(i32::MIN, Parity::Even)]
    fn test_parity_of(number: i32, expected: Parity) {
        assert_eq2!(Parity::of(number), expected);
    }
}
