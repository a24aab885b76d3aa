//! Whose turn it is and who comes next.

use tilebrawl_shared::{PlayerId, QueueEntry};

/// A queue entry as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnQueueEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    /// This entry is the local player
    pub is_you: bool,
}

impl TurnQueueEntry {
    pub fn label(&self) -> String {
        if self.is_you {
            format!("{} (you)", self.player_name)
        } else {
            self.player_name.clone()
        }
    }
}

/// Turn display, replaced wholesale on every `turn` message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnState {
    pub current_player_id: Option<PlayerId>,
    pub current_player_name: String,
    pub queue: Vec<TurnQueueEntry>,
}

impl TurnState {
    pub fn from_wire(
        player_id: Option<PlayerId>,
        player_name: &str,
        queue: &[QueueEntry],
        my_id: Option<&PlayerId>,
    ) -> Self {
        Self {
            current_player_id: player_id,
            current_player_name: if player_name.is_empty() {
                "-".to_string()
            } else {
                player_name.to_string()
            },
            queue: queue
                .iter()
                .map(|entry| TurnQueueEntry {
                    player_id: entry.player_id.clone(),
                    player_name: entry.player_name.clone(),
                    is_you: my_id == Some(&entry.player_id),
                })
                .collect(),
        }
    }

    pub fn is_my_turn(&self, my_id: Option<&PlayerId>) -> bool {
        match (my_id, self.current_player_id.as_ref()) {
            (Some(mine), Some(current)) => mine == current,
            _ => false,
        }
    }

    /// `Your turn` or `Waiting: <name>`.
    pub fn status_line(&self, my_id: Option<&PlayerId>) -> String {
        if self.is_my_turn(my_id) {
            "Your turn".to_string()
        } else {
            format!("Waiting: {}", self.current_player_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> QueueEntry {
        QueueEntry {
            player_id: PlayerId::new(id),
            player_name: name.to_string(),
        }
    }

    #[test]
    fn marks_exactly_the_local_entry() {
        let queue = [entry("1", "A"), entry("2", "B")];
        let my_id = PlayerId::new("2");
        let turn = TurnState::from_wire(Some(PlayerId::new("1")), "A", &queue, Some(&my_id));

        let labels: Vec<String> = turn.queue.iter().map(TurnQueueEntry::label).collect();
        assert_eq!(labels, ["A", "B (you)"]);
        assert_eq!(turn.status_line(Some(&my_id)), "Waiting: A");
    }

    #[test]
    fn nothing_marked_before_init() {
        let queue = [entry("1", "A"), entry("2", "B")];
        let turn = TurnState::from_wire(Some(PlayerId::new("1")), "A", &queue, None);

        assert!(turn.queue.iter().all(|e| !e.is_you));
        assert!(!turn.is_my_turn(None));
    }

    #[test]
    fn own_turn_and_empty_name() {
        let my_id = PlayerId::new("7");
        let turn = TurnState::from_wire(Some(my_id.clone()), "", &[], Some(&my_id));

        assert_eq!(turn.current_player_name, "-");
        assert_eq!(turn.status_line(Some(&my_id)), "Your turn");
    }
}
