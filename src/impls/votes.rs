use crate::portalapi::types::cases::{Vote, VoteDirection};

impl Vote {
    /// Adjustment applied on top of the stored vote count
    pub fn offset(&self) -> i64 {
        match self {
            Vote::None => 0,
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }

    /// Clicking the active direction again cancels the vote, anything else switches to it
    pub fn toggle(self, direction: VoteDirection) -> Vote {
        match (self, direction) {
            (Vote::Up, VoteDirection::Up) | (Vote::Down, VoteDirection::Down) => Vote::None,
            (_, VoteDirection::Up) => Vote::Up,
            (_, VoteDirection::Down) => Vote::Down,
        }
    }
}

/// Vote count shown for a case
pub fn displayed_votes(stored: i64, vote: Vote) -> i64 {
    stored + vote.offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Vote::None.toggle(VoteDirection::Up), Vote::Up);
        assert_eq!(Vote::Up.toggle(VoteDirection::Up), Vote::None);
        assert_eq!(Vote::Up.toggle(VoteDirection::Down), Vote::Down);
        assert_eq!(Vote::Down.toggle(VoteDirection::Down), Vote::None);
        assert_eq!(Vote::Down.toggle(VoteDirection::Up), Vote::Up);
    }

    #[test]
    fn test_displayed_votes_follow_clicks() {
        // first vote moves by one, switching moves by two, cancelling returns to the stored count
        let mut vote = Vote::None;

        vote = vote.toggle(VoteDirection::Up);
        assert_eq!(displayed_votes(128, vote), 129);

        vote = vote.toggle(VoteDirection::Down);
        assert_eq!(displayed_votes(128, vote), 127);

        vote = vote.toggle(VoteDirection::Down);
        assert_eq!(displayed_votes(128, vote), 128);
    }
}
