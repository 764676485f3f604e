use crate::models::GameRecord;

/// Decides whether two library entries are the same title
///
/// Catalog ids decide when both sides carry one. Otherwise names must be
/// exactly equal: no case folding, no trimming.
pub fn same_game(a: &GameRecord, b: &GameRecord) -> bool {
    match (a.catalog_id, b.catalog_id) {
        (Some(left), Some(right)) => left == right,
        _ => a.name == b.name,
    }
}

/// Result of pairing two libraries
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub shared: Vec<(&'a GameRecord, &'a GameRecord)>,
    pub user1_only: Vec<&'a GameRecord>,
    pub user2_only: Vec<&'a GameRecord>,
}

/// Pairs each game of `user1` with the first unclaimed match in `user2`
///
/// A user2 entry is claimed by at most one user1 entry, so duplicates on one
/// side never inflate the shared count.
pub fn partition<'a>(user1: &'a [GameRecord], user2: &'a [GameRecord]) -> Partition<'a> {
    let mut claimed = vec![false; user2.len()];
    let mut result = Partition::default();

    for game in user1 {
        let found = user2
            .iter()
            .enumerate()
            .find(|(idx, candidate)| !claimed[*idx] && same_game(game, candidate));

        match found {
            Some((idx, other)) => {
                claimed[idx] = true;
                result.shared.push((game, other));
            }
            None => result.user1_only.push(game),
        }
    }

    result.user2_only = user2
        .iter()
        .zip(claimed)
        .filter(|(_, taken)| !taken)
        .map(|(game, _)| game)
        .collect();

    result
}
