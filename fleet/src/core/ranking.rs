//! Activity ranking by completed missions

use shared::Mover;

/// Order movers by completed missions, most active first
///
/// Ties are broken by creation time and then id, so the same fleet always
/// ranks the same way regardless of the order the store returned it in.
pub fn rank_most_active(mut movers: Vec<Mover>) -> Vec<Mover> {
    movers.sort_by(|a, b| {
        b.completed_missions
            .cmp(&a.completed_missions)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    movers
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn mover(name: &str, completed: u64) -> Mover {
        let mut mover = Mover::new(name, 100.0);
        mover.completed_missions = completed;
        mover
    }

    #[test]
    fn test_most_active_first() {
        let ranked = rank_most_active(vec![mover("a", 1), mover("b", 5), mover("c", 3)]);
        let names: Vec<_> = ranked.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_ordered_by_creation_time() {
        let mut older = mover("older", 2);
        let mut newer = mover("newer", 2);
        older.created_at = newer.created_at - Duration::seconds(10);
        newer.created_at = older.created_at + Duration::seconds(10);

        let ranked = rank_most_active(vec![newer, older]);
        assert_eq!(ranked[0].name, "older");
        assert_eq!(ranked[1].name, "newer");
    }

    #[test]
    fn test_ranking_is_non_increasing() {
        let ranked = rank_most_active((0..20).map(|i| mover("m", (i * 7) % 5)).collect());
        assert!(ranked.windows(2).all(|w| w[0].completed_missions >= w[1].completed_missions));
    }

    #[test]
    fn test_empty_fleet() {
        assert!(rank_most_active(Vec::new()).is_empty());
    }
}
