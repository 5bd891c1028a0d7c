use serde::{Deserialize, Serialize};

use crate::TravelMode;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub name: String,
    pub checked: bool,
    pub mandatory: bool,
}

/// A named group of things to sort out before leaving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripChecklist {
    pub category: String,
    pub items: Vec<ChecklistItem>,
}

impl TripChecklist {
    fn new(category: &str, prefix: &str, items: &[(&str, bool)]) -> TripChecklist {
        TripChecklist {
            category: category.to_string(),
            items: items
                .iter()
                .enumerate()
                .map(|(idx, (name, mandatory))| ChecklistItem {
                    id: format!("{}-{}", prefix, idx + 1),
                    name: name.to_string(),
                    checked: false,
                    mandatory: *mandatory,
                })
                .collect(),
        }
    }

    /// Flips an item. Returns false if there's no such item.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.checked = !item.checked;
            true
        } else {
            false
        }
    }

    /// (checked, total)
    pub fn progress(&self) -> (usize, usize) {
        (
            self.items.iter().filter(|i| i.checked).count(),
            self.items.len(),
        )
    }

    pub fn missing_mandatory(&self) -> Vec<&ChecklistItem> {
        self.items
            .iter()
            .filter(|i| i.mandatory && !i.checked)
            .collect()
    }
}

/// The checklists a new trip starts with. Essentials always come first; vehicle and trekking
/// lists depend on the mode, and groups get a coordination list. Nothing starts checked.
pub fn default_checklists(mode: TravelMode, is_group: bool) -> Vec<TripChecklist> {
    let mut lists = vec![TripChecklist::new(
        "Essentials",
        "essentials",
        &[
            ("ID and travel documents", true),
            ("Phone charger and power bank", true),
            ("First-aid kit", true),
            ("Water bottles", true),
            ("Cash and cards", true),
            ("Personal medicines", true),
            ("Snacks", false),
        ],
    )];

    if mode == TravelMode::Drive {
        lists.push(TripChecklist::new(
            "Vehicle",
            "vehicle",
            &[
                ("Driving license and registration", true),
                ("Vehicle insurance papers", true),
                ("Pollution certificate", true),
                ("Spare tyre and jack", true),
                ("Full fuel tank", true),
            ],
        ));
    }

    if mode == TravelMode::Trek {
        lists.push(TripChecklist::new(
            "Trekking Gear",
            "trek",
            &[
                ("Trekking shoes", true),
                ("Backpack with rain cover", true),
                ("Rain jacket", true),
                ("Headlamp and spare batteries", true),
                ("Trekking poles", false),
                ("Water purification tablets", true),
            ],
        ));
    }

    if is_group {
        lists.push(TripChecklist::new(
            "Group Coordination",
            "group",
            &[
                ("Share live location with the group", true),
                ("Collect emergency contacts", true),
                ("Agree on a meeting point", true),
                ("Create a group chat", false),
            ],
        ));
    }

    lists
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn summary(lists: &[TripChecklist]) -> Vec<(&str, usize, usize)> {
        lists
            .iter()
            .map(|l| {
                (
                    l.category.as_str(),
                    l.items.len(),
                    l.items.iter().filter(|i| i.mandatory).count(),
                )
            })
            .collect()
    }

    #[test]
    fn drive_solo() {
        assert_eq!(
            summary(&default_checklists(TravelMode::Drive, false)),
            vec![("Essentials", 7, 6), ("Vehicle", 5, 5)]
        );
    }

    #[test]
    fn trek_group() {
        assert_eq!(
            summary(&default_checklists(TravelMode::Trek, true)),
            vec![
                ("Essentials", 7, 6),
                ("Trekking Gear", 6, 5),
                ("Group Coordination", 4, 3)
            ]
        );
    }

    #[test]
    fn other_modes() {
        assert_eq!(
            summary(&default_checklists(TravelMode::Drive, true)),
            vec![
                ("Essentials", 7, 6),
                ("Vehicle", 5, 5),
                ("Group Coordination", 4, 3)
            ]
        );
        for mode in [TravelMode::Bike, TravelMode::Walk, TravelMode::Transit] {
            assert_eq!(
                summary(&default_checklists(mode, false)),
                vec![("Essentials", 7, 6)]
            );
        }
    }

    #[test]
    fn unchecked_with_unique_ids() {
        for mode in TravelMode::iter() {
            let lists = default_checklists(mode, true);
            let ids: Vec<&String> = lists
                .iter()
                .flat_map(|l| l.items.iter().map(|i| &i.id))
                .collect();
            assert!(!rtutil::contains_duplicates(&ids));
            assert!(lists.iter().all(|l| l.items.iter().all(|i| !i.checked)));
        }
        // Deterministic
        assert_eq!(
            default_checklists(TravelMode::Trek, true),
            default_checklists(TravelMode::Trek, true)
        );
    }

    #[test]
    fn toggling() {
        let mut list = default_checklists(TravelMode::Walk, false).remove(0);
        assert_eq!(list.progress(), (0, 7));
        assert_eq!(list.missing_mandatory().len(), 6);

        assert!(list.toggle("essentials-1"));
        assert!(list.toggle("essentials-7"));
        assert_eq!(list.progress(), (2, 7));
        assert_eq!(list.missing_mandatory().len(), 5);

        assert!(list.toggle("essentials-7"));
        assert_eq!(list.progress(), (1, 7));
        assert!(!list.toggle("vehicle-1"));
    }
}
