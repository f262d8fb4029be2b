// ABOUTME: skipHours and skipDays codecs for channel maintenance windows.
// ABOUTME: Out-of-range values are dropped on write, never on read.

use crate::xml_util::{Element, ElementCodec};
use serde::{Deserialize, Serialize};

/// The seven canonical weekday names skipDays accepts.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Hours (0-23, GMT) during which aggregators may skip the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkipHours {
    pub hours: Vec<u32>,
}

impl SkipHours {
    pub fn new(hours: impl Into<Vec<u32>>) -> SkipHours {
        SkipHours {
            hours: hours.into(),
        }
    }
}

impl ElementCodec for SkipHours {
    fn to_element(&self) -> Element {
        let mut element = Element::new("skipHours");
        for hour in self.hours.iter().filter(|h| **h <= 23) {
            element.add_child("hour", hour);
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        // Reads keep whatever parses; range filtering happens on write.
        self.hours = element
            .children()
            .iter()
            .filter(|child| child.namespace().is_none() && child.name() == "hour")
            .filter_map(|child| child.text().trim().parse().ok())
            .collect();
    }
}

/// Weekday names during which aggregators may skip the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkipDays {
    pub days: Vec<String>,
}

impl SkipDays {
    pub fn new<I, S>(days: I) -> SkipDays
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SkipDays {
            days: days.into_iter().map(Into::into).collect(),
        }
    }
}

impl ElementCodec for SkipDays {
    fn to_element(&self) -> Element {
        let mut element = Element::new("skipDays");
        for day in self
            .days
            .iter()
            .filter(|day| DAY_NAMES.contains(&day.as_str()))
        {
            element.add_child("day", day);
        }
        element
    }

    fn load(&mut self, element: &Element) {
        if element.namespace().is_some() {
            return;
        }
        self.days = element
            .children()
            .iter()
            .filter(|child| child.namespace().is_none() && child.name() == "day")
            .map(|child| child.text().to_string())
            .filter(|day| !day.is_empty())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_out_of_range_hours_dropped_on_write() {
        let skip = SkipHours::new(vec![5, 30, 12]);
        let element = skip.to_element();
        let written: Vec<String> = element
            .children()
            .iter()
            .map(|child| child.text().to_string())
            .collect();
        assert_eq!(written, vec!["5", "12"]);
    }

    #[test]
    fn test_out_of_range_hours_kept_on_read() {
        let mut element = Element::new("skipHours");
        element.add_child("hour", 30);
        element.add_child("hour", 7);
        let skip = SkipHours::from_element(&element);
        assert_eq!(skip.hours, vec![30, 7]);
    }

    #[test]
    fn test_unknown_days_dropped_on_write() {
        let skip = SkipDays::new(["Monday", "Funday"]);
        let element = skip.to_element();
        assert_eq!(element.children().len(), 1);
        assert_eq!(element.children()[0].text(), "Monday");
    }

    #[test]
    fn test_day_round_trip() {
        let skip = SkipDays::new(["Saturday", "Sunday"]);
        assert_eq!(SkipDays::from_element(&skip.to_element()), skip);
    }
}
