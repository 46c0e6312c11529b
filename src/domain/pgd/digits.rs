//! Digit extraction from birth date components.
//!
//! Grouping rules are part of the public contract: changing a width or
//! an ordering here changes every downstream profile.

use crate::domain::foundation::BirthDate;

/// The date slices a cell formula may draw digits from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateComponent {
    /// Two digits, `DD`.
    Day,
    /// Two digits, `MM`.
    Month,
    /// Four digits, `YYYY`.
    Year,
    /// Four digits, `DDMM`.
    DayMonth,
    /// Eight digits, `DDMMYYYY`.
    FullDate,
}

impl DateComponent {
    /// All components, in catalogue order.
    pub const ALL: &'static [DateComponent] = &[
        DateComponent::Day,
        DateComponent::Month,
        DateComponent::Year,
        DateComponent::DayMonth,
        DateComponent::FullDate,
    ];

    /// Digit width of the zero-padded component.
    pub fn width(&self) -> usize {
        match self {
            DateComponent::Day | DateComponent::Month => 2,
            DateComponent::Year | DateComponent::DayMonth => 4,
            DateComponent::FullDate => 8,
        }
    }
}

/// An ordered sequence of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitGroup(Vec<u8>);

impl DigitGroup {
    /// The empty group; reduces to null, not to zero.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Builds a zero-padded group from a numeric value.
    ///
    /// The value must fit the width; extraction always satisfies this
    /// because component widths match the calendar field ranges.
    pub fn from_value(value: u32, width: usize) -> Self {
        let mut digits = Vec::with_capacity(width);
        for position in (0..width).rev() {
            let divisor = 10u32.pow(position as u32);
            digits.push(((value / divisor) % 10) as u8);
        }
        Self(digits)
    }

    /// The digits in order, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all digits.
    pub fn digit_sum(&self) -> u32 {
        self.0.iter().map(|&d| u32::from(d)).sum()
    }

    /// Positional numeric value of the group.
    pub fn numeric_value(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d))
    }
}

/// Produces the digit-group catalogue for a validated birth date.
///
/// Every extraction is total: a valid `BirthDate` always yields a group
/// of the component's full width.
pub struct DigitExtractor;

impl DigitExtractor {
    /// Extracts one component's digit group.
    pub fn extract(date: BirthDate, component: DateComponent) -> DigitGroup {
        let day = u32::from(date.day());
        let month = u32::from(date.month());
        let year = u32::from(date.year());

        let value = match component {
            DateComponent::Day => day,
            DateComponent::Month => month,
            DateComponent::Year => year,
            DateComponent::DayMonth => day * 100 + month,
            DateComponent::FullDate => day * 1_000_000 + month * 10_000 + year,
        };
        DigitGroup::from_value(value, component.width())
    }

    /// Extracts the whole catalogue in declaration order.
    pub fn catalogue(date: BirthDate) -> Vec<(DateComponent, DigitGroup)> {
        DateComponent::ALL
            .iter()
            .map(|&component| (component, Self::extract(date, component)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> BirthDate {
        BirthDate::parse(text).unwrap()
    }

    #[test]
    fn extractor_pads_day_and_month_to_two_digits() {
        let d = date("01.05.1990");
        assert_eq!(
            DigitExtractor::extract(d, DateComponent::Day).digits(),
            &[0, 1]
        );
        assert_eq!(
            DigitExtractor::extract(d, DateComponent::Month).digits(),
            &[0, 5]
        );
    }

    #[test]
    fn extractor_year_keeps_four_digits() {
        let group = DigitExtractor::extract(date("15.05.1990"), DateComponent::Year);
        assert_eq!(group.digits(), &[1, 9, 9, 0]);
        assert_eq!(group.digit_sum(), 19);
    }

    #[test]
    fn extractor_day_month_concatenates_in_order() {
        let group = DigitExtractor::extract(date("15.05.1990"), DateComponent::DayMonth);
        assert_eq!(group.digits(), &[1, 5, 0, 5]);
    }

    #[test]
    fn extractor_full_date_concatenates_all_components() {
        let group = DigitExtractor::extract(date("01.01.2001"), DateComponent::FullDate);
        assert_eq!(group.digits(), &[0, 1, 0, 1, 2, 0, 0, 1]);
        assert_eq!(group.len(), 8);
    }

    #[test]
    fn extractor_catalogue_covers_every_component() {
        let catalogue = DigitExtractor::catalogue(date("29.02.2000"));
        assert_eq!(catalogue.len(), DateComponent::ALL.len());
        for (component, group) in catalogue {
            assert_eq!(group.len(), component.width());
        }
    }

    #[test]
    fn digit_group_numeric_value_inverts_padding() {
        let group = DigitGroup::from_value(15, 2);
        assert_eq!(group.numeric_value(), 15);

        let padded = DigitGroup::from_value(7, 4);
        assert_eq!(padded.digits(), &[0, 0, 0, 7]);
        assert_eq!(padded.numeric_value(), 7);
    }

    #[test]
    fn digit_group_empty_has_no_digits() {
        let group = DigitGroup::empty();
        assert!(group.is_empty());
        assert_eq!(group.digit_sum(), 0);
        assert_eq!(group.numeric_value(), 0);
    }
}
