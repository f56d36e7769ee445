//! Weekly schedule template types.
//!
//! A `WeeklySchedule` holds, for each day of the week, the ordered list of
//! time blocks that recur on that day. Items are kept exactly as they appear
//! in the source file; whether an item produces an event is decided later,
//! during expansion.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Day of the week, keyed in schedule files by its lowercase English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Lowercase English name, as used for schedule keys.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Look up a day by its schedule key. Only exact lowercase names match.
    pub fn from_name(name: &str) -> Option<Day> {
        Day::ALL.into_iter().find(|day| day.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Day::Monday,
            chrono::Weekday::Tue => Day::Tuesday,
            chrono::Weekday::Wed => Day::Wednesday,
            chrono::Weekday::Thu => Day::Thursday,
            chrono::Weekday::Fri => Day::Friday,
            chrono::Weekday::Sat => Day::Saturday,
            chrono::Weekday::Sun => Day::Sunday,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `type` discriminator of a schedule item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Scheduled class time (busy)
    Teaching,
    /// Student/office hours (busy)
    Student,
    /// On campus and open for meetings (free)
    Campus,
    /// Anything else; never produces an event
    Other(String),
}

impl ItemKind {
    pub fn from_type(value: &str) -> ItemKind {
        match value {
            "teaching" => ItemKind::Teaching,
            "student" => ItemKind::Student,
            "campus" => ItemKind::Campus,
            other => ItemKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Teaching => "teaching",
            ItemKind::Student => "student",
            ItemKind::Campus => "campus",
            ItemKind::Other(other) => other,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ItemKind::Other(_))
    }
}

/// One block of time within a single weekday.
///
/// Fields that are missing or falsy in the source file (`null`, `false`,
/// `0`, `""`) are stored as `None`. Other non-string values are kept in
/// their JSON text form, so a time such as `900` fails when parsed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: Option<ItemKind>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub class_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub class_location: Option<String>,
}

impl ScheduleItem {
    /// Whether this item carries everything needed to become an event.
    pub fn is_materializable(&self) -> bool {
        self.kind.as_ref().is_some_and(ItemKind::is_recognized)
            && self.start_time.is_some()
            && self.end_time.is_some()
    }
}

/// `null`, `false`, `0` and `""`.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        ref v if is_falsy(v) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_kind<'de, D>(deserializer: D) -> Result<Option<ItemKind>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.map(|s| ItemKind::from_type(&s)))
}

/// One element of a day's list in a schedule file.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleEntry {
    Item(ScheduleItem),
    /// A `null` list element; expanding a date that reaches it fails
    Null,
}

/// Parsed weekly template: the items recurring on each day of the week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule {
    days: [Vec<ScheduleEntry>; 7],
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from the `schedule` object of a schedule file.
    ///
    /// Unknown keys and days whose value is not an array are ignored, as are
    /// list elements that are neither objects nor `null`.
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut schedule = WeeklySchedule::new();

        for (key, value) in map {
            let Some(day) = Day::from_name(key) else {
                tracing::debug!(key = %key, "ignoring unknown schedule key");
                continue;
            };
            let Value::Array(entries) = value else {
                tracing::debug!(day = %day, "schedule day is not a list, treating as empty");
                continue;
            };

            schedule.days[day.index()] = entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::Null => Some(ScheduleEntry::Null),
                    Value::Object(_) => ScheduleItem::deserialize(entry).ok().map(ScheduleEntry::Item),
                    _ => None,
                })
                .collect();
        }

        schedule
    }

    /// Every list element for `day`, in source order.
    pub fn entries(&self, day: Day) -> &[ScheduleEntry] {
        &self.days[day.index()]
    }

    /// The items for `day`, skipping `null` elements.
    pub fn items(&self, day: Day) -> impl Iterator<Item = &ScheduleItem> {
        self.entries(day).iter().filter_map(|entry| match entry {
            ScheduleEntry::Item(item) => Some(item),
            ScheduleEntry::Null => None,
        })
    }

    pub fn push(&mut self, day: Day, item: ScheduleItem) -> &mut Self {
        self.days[day.index()].push(ScheduleEntry::Item(item));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Per-day entry counts, in Monday..Sunday order.
    pub fn summary(&self) -> Vec<DaySummary> {
        Day::ALL
            .into_iter()
            .map(|day| DaySummary {
                day,
                items: self.entries(day).len(),
                materializable: self.items(day).filter(|i| i.is_materializable()).count(),
            })
            .collect()
    }
}

/// Item counts for one day of a `WeeklySchedule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub day: Day,
    /// List elements, `null` ones included
    pub items: usize,
    /// Items that will produce an event on every matching date
    pub materializable: usize,
}
