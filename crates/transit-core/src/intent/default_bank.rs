//! Curated example phrases for the transit assistant's intents.

use super::{IntentExampleSet, IntentLabel};

const ALERTS: &[&str] = &[
    "are there any delays on the red line",
    "any service disruptions",
    "orange line status",
    "is the green line running",
    "current alerts",
    "any problems with the T",
    "blue line delays",
    "service interruptions",
    "what's wrong with the red line",
    "subway problems",
    "train delays",
    "is service normal",
    "any outages",
    "commuter rail status",
    "bus delays",
    "service status",
    "are trains running",
    "any issues",
];

const TRIP_PLANNING: &[&str] = &[
    "how do I get to Boston Common",
    "route from Harvard to MIT",
    "best way to reach Fenway",
    "directions to South Station",
    "how to get from airport to downtown",
    "navigate to Prudential Center",
    "route to Cambridge",
    "take me to Back Bay",
    "plan my trip",
    "find route",
    "travel from A to B",
    "what's the fastest way",
    "commute from Harvard Square",
    "how long to get to",
    "directions please",
    "route planner",
    "get me to the airport",
    "travel time to Boston",
    "plan journey",
    "find my way",
];

const STOP_INFO: &[&str] = &[
    "find stops near me",
    "stations near Fenway Park",
    "closest T station",
    "where is Park Street",
    "stops on red line",
    "find South Station",
    "nearest subway",
    "stations in Cambridge",
    "list all stops",
    "where can I board",
    "T stops in Boston",
    "find station",
    "locate stop",
    "stops near address",
    "station information",
    "find nearest station",
    "subway stops nearby",
    "red line stations",
    "where is Harvard station",
    "station locations",
];

const SCHEDULE: &[&str] = &[
    "when does the next train arrive",
    "red line schedule",
    "arrival times at Park Street",
    "train times",
    "when is the next bus",
    "schedule for green line",
    "what time does the train come",
    "next departure",
    "commuter rail schedule",
    "bus timetable",
    "when does it arrive",
    "train frequency",
    "operating hours",
    "first train time",
    "last train time",
];

const GENERAL: &[&str] = &[
    "hello",
    "hi there",
    "good morning",
    "hey",
    "what can you do",
    "help me",
    "how does this work",
    "what are your capabilities",
    "tell me about yourself",
    "thanks",
    "thank you",
    "goodbye",
    "bye",
    "ok",
    "I see",
];

/// The default bank in configuration order.
pub(crate) fn default_sets() -> Vec<IntentExampleSet> {
    [
        (IntentLabel::ALERTS, ALERTS),
        (IntentLabel::TRIP_PLANNING, TRIP_PLANNING),
        (IntentLabel::STOP_INFO, STOP_INFO),
        (IntentLabel::SCHEDULE, SCHEDULE),
        (IntentLabel::GENERAL, GENERAL),
    ]
    .into_iter()
    .map(|(label, examples)| IntentExampleSet::new(label, examples.iter().copied()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentBank;

    #[test]
    fn default_sets_pass_bank_validation() {
        let bank = IntentBank::new(default_sets()).unwrap();
        assert_eq!(bank.len(), 5);
        assert_eq!(bank.example_count(), 18 + 20 + 20 + 15 + 15);
    }

    #[test]
    fn general_is_last() {
        let sets = default_sets();
        assert_eq!(sets.last().unwrap().label, IntentLabel::GENERAL);
    }
}
