//! Exit classification against the explored-location map.

use agent_core::{Direction, Location, WorldSnapshot};

/// Exit lists derived for one location.
#[derive(Debug, Default)]
pub(super) struct ExitClasses {
    pub available: Vec<Direction>,
    pub unvisited: Vec<Direction>,
    pub safe: Vec<Direction>,
    pub base_camp: Vec<Direction>,
    /// Exits to explored locations, most recently visited first.
    pub known: Vec<Direction>,
}

/// Classifies the open exits of `location`.
///
/// While `compromised`, an exit is only safe if it leads to an explored
/// location free of dangerous hazards and live hostiles. Otherwise every open
/// exit is considered safe.
pub(super) fn classify(location: &Location, snapshot: &WorldSnapshot, compromised: bool) -> ExitClasses {
    let mut classes = ExitClasses::default();
    let mut known: Vec<(Direction, u64)> = Vec::new();

    for exit in location.exits.iter().filter(|exit| exit.open) {
        classes.available.push(exit.direction);

        let Some(destination) = exit.destination.and_then(|id| snapshot.explored(id)) else {
            classes.unvisited.push(exit.direction);
            if !compromised {
                classes.safe.push(exit.direction);
            }
            continue;
        };

        known.push((exit.direction, destination.last_visited));
        if destination.is_base_camp() {
            classes.base_camp.push(exit.direction);
        }
        if !compromised || (!destination.is_dangerous() && !destination.has_hostiles()) {
            classes.safe.push(exit.direction);
        }
    }

    known.sort_by(|a, b| b.1.cmp(&a.1));
    classes.known = known.into_iter().map(|(direction, _)| direction).collect();
    classes
}

#[cfg(test)]
mod tests {
    use agent_core::{ActorState, BaseCamp, Exit, LocationId, Occupant};

    use super::*;

    fn snapshot() -> WorldSnapshot {
        let here = Location::new(1, "junction")
            .with_exit(Exit::to(Direction::North, LocationId(2)))
            .with_exit(Exit::to(Direction::East, LocationId(3)))
            .with_exit(Exit::to(Direction::West, LocationId(4)))
            .with_exit(Exit::unknown(Direction::South))
            .with_exit(Exit::unknown(Direction::Down).closed());
        WorldSnapshot::new(ActorState::new(30, 100), here)
            .with_explored(Location::new(2, "camp").with_base_camp(BaseCamp::default()).visited_at(3))
            .with_explored(
                Location::new(3, "den")
                    .with_occupant(Occupant::hostile(9, "ghoul", 10, 10))
                    .visited_at(7),
            )
            .with_explored(Location::new(4, "vent").with_hazard("toxic fumes").visited_at(5))
    }

    #[test]
    fn closed_exits_are_not_available() {
        let snapshot = snapshot();
        let location = snapshot.location.as_ref().map(|l| classify(l, &snapshot, false));
        let classes = location.unwrap_or_default();
        assert_eq!(classes.available.len(), 4);
        assert!(!classes.available.contains(&Direction::Down));
        assert_eq!(classes.unvisited, vec![Direction::South]);
        assert_eq!(classes.safe.len(), 4);
    }

    #[test]
    fn compromised_safety_excludes_hostile_and_hazardous_destinations() {
        let snapshot = snapshot();
        let here = snapshot.location.clone().unwrap_or_default();
        let classes = classify(&here, &snapshot, true);
        assert_eq!(classes.safe, vec![Direction::North]);
        assert_eq!(classes.base_camp, vec![Direction::North]);
        assert_eq!(classes.known, vec![Direction::East, Direction::West, Direction::North]);
    }
}
